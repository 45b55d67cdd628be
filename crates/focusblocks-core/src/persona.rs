//! Named presets for common work environments.

use serde::Serialize;

/// Tolerance used when matching a rate back to a preset.
const RATE_MATCH_TOLERANCE: f64 = 0.01;

/// A preset pairing of interruption rate and recovery time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Persona {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub interruptions_per_hour: f64,
    pub recovery_minutes: f64,
}

impl Persona {
    /// Whether `rate`/`recovery` select this preset.
    ///
    /// Rates match within a small tolerance, recovery must match exactly.
    pub fn matches(&self, rate_per_hour: f64, recovery_minutes: f64) -> bool {
        (self.interruptions_per_hour - rate_per_hour).abs() < RATE_MATCH_TOLERANCE
            && self.recovery_minutes == recovery_minutes
    }

    /// Look up a preset by id.
    pub fn find(id: &str) -> Option<&'static Persona> {
        PERSONAS.iter().find(|p| p.id.eq_ignore_ascii_case(id))
    }
}

pub const PERSONAS: &[Persona] = &[
    Persona {
        id: "deep_work",
        label: "Deep Work",
        description: "Async-first, few meetings",
        interruptions_per_hour: 0.4,
        recovery_minutes: 7.0,
    },
    Persona {
        id: "maker",
        label: "Typical Maker",
        description: "Daily standup, some pings",
        interruptions_per_hour: 1.0,
        recovery_minutes: 11.0,
    },
    Persona {
        id: "manager",
        label: "Manager",
        description: "Coordination heavy",
        interruptions_per_hour: 2.2,
        recovery_minutes: 19.0,
    },
    Persona {
        id: "executive",
        label: "Executive",
        description: "Context switching pro",
        interruptions_per_hour: 3.0,
        recovery_minutes: 25.0,
    },
    Persona {
        id: "on_call",
        label: "On-Call",
        description: "Firefighting mode",
        interruptions_per_hour: 2.1,
        recovery_minutes: 17.0,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_by_id() {
        let manager = Persona::find("manager").unwrap();
        assert_eq!(manager.interruptions_per_hour, 2.2);
        assert_eq!(manager.recovery_minutes, 19.0);
        assert!(Persona::find("ON_CALL").is_some());
        assert!(Persona::find("custom").is_none());
    }

    #[test]
    fn test_matching_tolerates_small_rate_drift() {
        let maker = Persona::find("maker").unwrap();
        assert!(maker.matches(1.005, 11.0));
        assert!(!maker.matches(1.02, 11.0));
        assert!(!maker.matches(1.0, 11.5));
    }

    #[test]
    fn test_presets_are_distinct() {
        for (i, a) in PERSONAS.iter().enumerate() {
            for b in &PERSONAS[i + 1..] {
                assert!(!a.matches(b.interruptions_per_hour, b.recovery_minutes));
            }
        }
    }
}
