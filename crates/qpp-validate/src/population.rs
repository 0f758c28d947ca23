//! Population roles of an eCQM sub-population and how children are matched to them.
//!
//! A measure reference node satisfies a role of a sub-population when one of
//! its direct children carries the role's expected population identifier
//! *and* one of the role's measure type codes. Identifiers are not unique
//! across roles, so the code is needed to tell them apart.

use qpp_model::{Node, SubPopulation};

/// Attribute holding a measure data node's population identifier.
pub const MEASURE_POPULATION: &str = "population";
/// Attribute holding a measure data node's measure type code.
pub const MEASURE_TYPE: &str = "measureType";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PopulationRole {
    DenominatorException,
    DenominatorExclusion,
    Numerator,
    InitialPopulation,
    Denominator,
}

struct RoleSpec {
    role: PopulationRole,
    label: &'static str,
    measure_types: &'static [&'static str],
    expected: fn(&SubPopulation) -> Option<&str>,
}

fn denominator_exception(sub: &SubPopulation) -> Option<&str> {
    sub.denominator_exceptions_uuid.as_deref()
}

fn denominator_exclusion(sub: &SubPopulation) -> Option<&str> {
    sub.denominator_exclusions_uuid.as_deref()
}

fn numerator(sub: &SubPopulation) -> Option<&str> {
    sub.numerator_uuid.as_deref()
}

fn initial_population(sub: &SubPopulation) -> Option<&str> {
    sub.initial_population_uuid.as_deref()
}

fn denominator(sub: &SubPopulation) -> Option<&str> {
    sub.denominator_uuid.as_deref()
}

// Evaluation order; error output follows it.
static ROLES: [RoleSpec; 5] = [
    RoleSpec {
        role: PopulationRole::DenominatorException,
        label: "denominator exception",
        measure_types: &["DENEXCEP"],
        expected: denominator_exception,
    },
    RoleSpec {
        role: PopulationRole::DenominatorExclusion,
        label: "denominator exclusion",
        measure_types: &["DENEX"],
        expected: denominator_exclusion,
    },
    RoleSpec {
        role: PopulationRole::Numerator,
        label: "numerator",
        measure_types: &["NUMER"],
        expected: numerator,
    },
    RoleSpec {
        role: PopulationRole::InitialPopulation,
        label: "eligible population",
        measure_types: &["IPOP", "IPP"],
        expected: initial_population,
    },
    RoleSpec {
        role: PopulationRole::Denominator,
        label: "denominator",
        measure_types: &["DENOM"],
        expected: denominator,
    },
];

impl PopulationRole {
    /// All roles in evaluation order.
    pub fn all() -> impl Iterator<Item = PopulationRole> {
        ROLES.iter().map(|spec| spec.role)
    }

    fn spec(self) -> &'static RoleSpec {
        let index = match self {
            Self::DenominatorException => 0,
            Self::DenominatorExclusion => 1,
            Self::Numerator => 2,
            Self::InitialPopulation => 3,
            Self::Denominator => 4,
        };
        &ROLES[index]
    }

    /// Label used in error messages.
    pub fn label(self) -> &'static str {
        self.spec().label
    }

    /// Measure type codes accepted for this role.
    pub fn measure_types(self) -> &'static [&'static str] {
        self.spec().measure_types
    }

    /// Identifier this sub-population expects for the role, if any.
    pub fn expected_id(self, sub_population: &SubPopulation) -> Option<&str> {
        (self.spec().expected)(sub_population)
    }

    /// Predicate selecting children that fulfil this role for `expected_id`.
    pub fn matcher(self, expected_id: &str) -> impl Fn(&Node) -> bool + Clone + '_ {
        let measure_types = self.measure_types();
        move |node: &Node| {
            node.value(MEASURE_POPULATION) == Some(expected_id)
                && node
                    .value(MEASURE_TYPE)
                    .is_some_and(|code| measure_types.contains(&code))
        }
    }
}
