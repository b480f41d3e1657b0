//! Registrations shared by the unit tests of this crate

use eulerbench_core::{
    Answer, Catalog, CatalogStore, NamingScheme, ParamDef, ProblemArgs, ProblemDef,
    ProblemDescriptor, ProblemId, ProblemResolver, ResourceBundle, SolveError, VersionDef,
};

fn doubled(args: &ProblemArgs, _: Option<&ResourceBundle>) -> Result<Answer, SolveError> {
    let number: u64 = args.get("number")?;
    Ok(Answer::from(number * 2))
}

fn forty_two(_: &ProblemArgs, _: Option<&ResourceBundle>) -> Result<Answer, SolveError> {
    Ok(Answer::from(42u32))
}

fn exhausted(_: &ProblemArgs, _: Option<&ResourceBundle>) -> Result<Answer, SolveError> {
    Err(SolveError::NoSolution)
}

static PARAMS: [ParamDef; 1] = [ParamDef {
    name: "number",
    default: Some("21"),
}];

static PROBLEMS: [ProblemDef; 2] = [
    ProblemDef {
        id: 1,
        name: "Doubling",
        description: "Double the given number.",
        params: &PARAMS,
        file: "tests_support.rs",
        module_path: "tests_support::problem001",
    },
    ProblemDef {
        id: 2,
        name: "Unsolvable",
        description: "",
        params: &[],
        file: "tests_support.rs",
        module_path: "tests_support::problem002",
    },
];

const fn version(
    problem: ProblemId,
    version: u32,
    name: &'static str,
    solution: eulerbench_core::SolutionFn,
    module_path: &'static str,
) -> VersionDef {
    VersionDef {
        problem,
        version,
        name,
        description: "",
        solution,
        file: "tests_support.rs",
        line: 1,
        module_path,
    }
}

// problem001/version004 is registered twice and never resolves
static VERSIONS: [VersionDef; 6] = [
    version(1, 1, "Doubled", doubled, "tests_support::problem001::version001"),
    version(1, 2, "Constant", forty_two, "tests_support::problem001::version002"),
    version(1, 4, "First", forty_two, "tests_support::problem001::version004"),
    version(1, 4, "Second", doubled, "tests_support::problem001::version004"),
    version(2, 1, "Exhaustive", exhausted, "tests_support::problem002::version001"),
    version(2, 2, "", forty_two, "tests_support::problem002::version002"),
];

pub(crate) fn test_catalog() -> Catalog {
    Catalog::from_defs(&PROBLEMS, &VERSIONS)
}

pub(crate) fn resolve(catalog: &Catalog, problem: ProblemId) -> ProblemDescriptor {
    let naming = NamingScheme::default();
    let store = CatalogStore::new(catalog, &naming);
    ProblemResolver::new(catalog, &store, naming)
        .resolve(problem)
        .unwrap()
}
