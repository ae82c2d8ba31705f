//! Macros for ergonomic state identifier definitions.

/// Generate a state identifier enum and its `StateId` implementation.
///
/// The variant name is the state name used to derive default handler
/// names, so `Idle` dispatches to `on_entry_Idle`, `in_state_Idle` and
/// `on_exit_Idle`.
///
/// # Example
///
/// ```
/// use tickfsm::core::StateId;
/// use tickfsm::state_enum;
///
/// state_enum! {
///     pub enum Enemy {
///         Patrol,
///         Chase,
///         Flee,
///     }
/// }
///
/// assert_eq!(Enemy::Chase.name(), "Chase");
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::StateId for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::StateId;

    state_enum! {
        enum TestState {
            Idle,
            Walking,
            Running,
        }
    }

    #[test]
    fn state_enum_macro_generates_trait() {
        assert_eq!(TestState::Idle.name(), "Idle");
        assert_eq!(TestState::Walking.name(), "Walking");
        assert_eq!(TestState::Running.name(), "Running");
    }

    #[test]
    fn state_enum_supports_visibility() {
        state_enum! {
            /// Doc comments pass through
            pub enum PublicState {
                A,
                B,
            }
        }

        let state = PublicState::A;
        assert_ne!(state, PublicState::B);
    }

    #[test]
    fn state_enum_values_hash_and_copy() {
        use std::collections::HashSet;

        let state = TestState::Running;
        let copy = state;
        let set: HashSet<TestState> = [state, copy, TestState::Idle].into_iter().collect();

        assert_eq!(set.len(), 2);
    }
}
