//! Handler bindings for state events.

use super::event::StateEvent;
use crate::config::HandlerPrefixes;
use crate::target::{Fault, HandlerFn, Target};
use std::fmt;
use std::sync::Arc;

/// How a single state event is dispatched.
pub enum Handler<T> {
    /// No handler: the event is not raised at all
    Disabled,

    /// A callable bound directly at configuration time
    Direct(HandlerFn<T>),

    /// A member name resolved against the target on every invocation
    Named(String),
}

impl<T: Target> Handler<T> {
    /// Bind an infallible closure.
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(&mut T, f64) + Send + Sync + 'static,
    {
        Self::try_new(move |target: &mut T, dt| {
            handler(target, dt);
            Ok(())
        })
    }

    /// Bind a closure that may fail. Its error propagates out of `process`.
    pub fn try_new<F>(handler: F) -> Self
    where
        F: Fn(&mut T, f64) -> Result<(), Fault> + Send + Sync + 'static,
    {
        Self::Direct(Arc::new(handler))
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Invoke the handler.
    ///
    /// Returns `None` when the binding is disabled or its name does not
    /// resolve on `target`; both mean "nothing to run".
    pub fn invoke(&self, target: &mut T, dt: f64) -> Option<Result<(), Fault>> {
        match self {
            Self::Disabled => None,
            Self::Direct(handler) => Some(handler(target, dt)),
            Self::Named(name) => target.handler(name).map(|handler| handler(target, dt)),
        }
    }
}

impl<T> Clone for Handler<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Disabled => Self::Disabled,
            Self::Direct(handler) => Self::Direct(Arc::clone(handler)),
            Self::Named(name) => Self::Named(name.clone()),
        }
    }
}

impl<T> fmt::Debug for Handler<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Disabled => f.write_str("Disabled"),
            Self::Direct(_) => f.write_str("Direct(<fn>)"),
            Self::Named(name) => f.debug_tuple("Named").field(name).finish(),
        }
    }
}

impl<T> From<&str> for Handler<T> {
    fn from(name: &str) -> Self {
        Self::Named(name.to_string())
    }
}

impl<T> From<String> for Handler<T> {
    fn from(name: String) -> Self {
        Self::Named(name)
    }
}

/// The three event bindings of one state.
pub struct HandlerSet<T> {
    pub on_entry: Handler<T>,
    pub in_state: Handler<T>,
    pub on_exit: Handler<T>,
}

impl<T> HandlerSet<T> {
    /// A set where no event is raised.
    pub fn disabled() -> Self {
        Self {
            on_entry: Handler::Disabled,
            in_state: Handler::Disabled,
            on_exit: Handler::Disabled,
        }
    }

    /// The conventional set for a state: each event resolves the member
    /// `<prefix><state name>` on the target.
    pub fn named_for(state: &str, prefixes: &HandlerPrefixes) -> Self {
        Self {
            on_entry: Handler::Named(format!("{}{}", prefixes.on_entry, state)),
            in_state: Handler::Named(format!("{}{}", prefixes.in_state, state)),
            on_exit: Handler::Named(format!("{}{}", prefixes.on_exit, state)),
        }
    }

    pub fn on_entry(mut self, handler: impl Into<Handler<T>>) -> Self {
        self.on_entry = handler.into();
        self
    }

    pub fn in_state(mut self, handler: impl Into<Handler<T>>) -> Self {
        self.in_state = handler.into();
        self
    }

    pub fn on_exit(mut self, handler: impl Into<Handler<T>>) -> Self {
        self.on_exit = handler.into();
        self
    }

    pub fn get(&self, event: StateEvent) -> &Handler<T> {
        match event {
            StateEvent::OnEntry => &self.on_entry,
            StateEvent::InState => &self.in_state,
            StateEvent::OnExit => &self.on_exit,
        }
    }
}

impl<T> Clone for HandlerSet<T> {
    fn clone(&self) -> Self {
        Self {
            on_entry: self.on_entry.clone(),
            in_state: self.in_state.clone(),
            on_exit: self.on_exit.clone(),
        }
    }
}

impl<T> fmt::Debug for HandlerSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerSet")
            .field("on_entry", &self.on_entry)
            .field("in_state", &self.in_state)
            .field("on_exit", &self.on_exit)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::target::{Dispatch, GuardFn};

    struct Recorder {
        calls: Vec<(String, f64)>,
        dispatch: Arc<Dispatch<Recorder>>,
    }

    impl Target for Recorder {
        fn handler(&self, name: &str) -> Option<HandlerFn<Self>> {
            self.dispatch.handler(name)
        }

        fn guard(&self, name: &str) -> Option<GuardFn<Self>> {
            self.dispatch.guard(name)
        }
    }

    fn recorder() -> Recorder {
        let dispatch = Dispatch::new().on("on_entry_Idle", |r: &mut Recorder, dt| {
            r.calls.push(("on_entry_Idle".to_string(), dt))
        });
        Recorder {
            calls: Vec::new(),
            dispatch: Arc::new(dispatch),
        }
    }

    #[test]
    fn disabled_handler_never_runs() {
        let mut target = recorder();
        let handler: Handler<Recorder> = Handler::Disabled;

        assert!(handler.invoke(&mut target, 1.0).is_none());
        assert!(target.calls.is_empty());
    }

    #[test]
    fn direct_handler_receives_delta() {
        let mut target = recorder();
        let handler = Handler::new(|r: &mut Recorder, dt| r.calls.push(("direct".into(), dt)));

        assert!(handler.invoke(&mut target, 0.5).unwrap().is_ok());
        assert_eq!(target.calls, vec![("direct".to_string(), 0.5)]);
    }

    #[test]
    fn named_handler_resolves_on_target() {
        let mut target = recorder();
        let handler: Handler<Recorder> = Handler::named("on_entry_Idle");

        assert!(handler.invoke(&mut target, 2.0).unwrap().is_ok());
        assert_eq!(target.calls, vec![("on_entry_Idle".to_string(), 2.0)]);
    }

    #[test]
    fn unresolved_name_is_skipped() {
        let mut target = recorder();
        let handler: Handler<Recorder> = "in_state_Missing".into();

        assert!(handler.invoke(&mut target, 1.0).is_none());
        assert!(target.calls.is_empty());
    }

    #[test]
    fn named_for_derives_conventional_names() {
        let set: HandlerSet<Recorder> = HandlerSet::named_for("Idle", &HandlerPrefixes::default());

        assert!(matches!(&set.on_entry, Handler::Named(n) if n == "on_entry_Idle"));
        assert!(matches!(&set.in_state, Handler::Named(n) if n == "in_state_Idle"));
        assert!(matches!(&set.on_exit, Handler::Named(n) if n == "on_exit_Idle"));
    }

    #[test]
    fn builder_methods_override_single_events() {
        let set: HandlerSet<Recorder> = HandlerSet::disabled()
            .on_entry("enter")
            .on_exit(Handler::new(|_: &mut Recorder, _| {}));

        assert!(matches!(set.get(StateEvent::OnEntry), Handler::Named(n) if n == "enter"));
        assert!(matches!(set.get(StateEvent::InState), Handler::Disabled));
        assert!(matches!(set.get(StateEvent::OnExit), Handler::Direct(_)));
    }
}
