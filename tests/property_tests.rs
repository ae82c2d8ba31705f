//! Property-based tests for the cycle protocol.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated topologies, guard outcomes and time deltas.

use proptest::prelude::*;
use tickfsm::{state_enum, Guard, Handler, HandlerSet, Machine, MachineConfig, StateEvent, Target};

state_enum! {
    enum Node {
        N0,
        N1,
        N2,
        N3,
    }
}

fn node(index: u8) -> Node {
    match index % 4 {
        0 => Node::N0,
        1 => Node::N1,
        2 => Node::N2,
        _ => Node::N3,
    }
}

/// Target whose guards are scripted per `(from, to)` edge and whose
/// handlers log `(event, state, dt)`.
#[derive(Default)]
struct Script {
    log: Vec<(StateEvent, Node, f64)>,
    evaluations: usize,
    open: Vec<(Node, Node)>,
}

impl Target for Script {}

fn logging(state: Node) -> HandlerSet<Script> {
    let entry = move |s: &mut Script, dt: f64| s.log.push((StateEvent::OnEntry, state, dt));
    let in_state = move |s: &mut Script, dt: f64| s.log.push((StateEvent::InState, state, dt));
    let exit = move |s: &mut Script, dt: f64| s.log.push((StateEvent::OnExit, state, dt));
    HandlerSet::disabled()
        .on_entry(Handler::new(entry))
        .in_state(Handler::new(in_state))
        .on_exit(Handler::new(exit))
}

fn build(initial: Node, edges: &[(Node, Node)], open: Vec<(Node, Node)>) -> Machine<Node, Script> {
    let mut config = MachineConfig::new().initial(initial);
    for index in 0..4 {
        config = config.state(node(index), logging(node(index)));
    }
    for &(from, to) in edges {
        config = config.transition(
            from,
            to,
            Guard::new(move |s: &mut Script| {
                s.evaluations += 1;
                s.open.contains(&(from, to))
            }),
        );
    }
    let script = Script {
        open,
        ..Script::default()
    };
    Machine::new(script, config).unwrap()
}

prop_compose! {
    fn arbitrary_node()(index in 0..4u8) -> Node {
        node(index)
    }
}

prop_compose! {
    fn arbitrary_machine()(
        initial in arbitrary_node(),
        edges in prop::collection::vec((arbitrary_node(), arbitrary_node()), 0..10),
        open_mask in prop::collection::vec(any::<bool>(), 10),
    ) -> Machine<Node, Script> {
        let open = edges
            .iter()
            .zip(open_mask)
            .filter(|(_, open)| *open)
            .map(|(edge, _)| *edge)
            .collect();
        build(initial, &edges, open)
    }
}

proptest! {
    #[test]
    fn new_machine_is_uninitialized(machine in arbitrary_machine()) {
        prop_assert!(machine.state().is_uninitialized());
        prop_assert!(machine.target().log.is_empty());
    }

    #[test]
    fn first_cycle_enters_initial_without_guards(
        mut machine in arbitrary_machine(),
        dt in 0.0..10.0f64,
    ) {
        let initial = *machine.initial();
        machine.process(dt).unwrap();

        prop_assert!(machine.state().is(&initial));
        prop_assert_eq!(machine.target().evaluations, 0);
        prop_assert_eq!(
            &machine.target().log,
            &vec![
                (StateEvent::OnEntry, initial, 0.0),
                (StateEvent::InState, initial, 0.0),
            ]
        );
    }

    #[test]
    fn every_cycle_ends_with_one_in_state(
        mut machine in arbitrary_machine(),
        deltas in prop::collection::vec(0.001..1.0f64, 1..20),
    ) {
        machine.process(0.016).unwrap();

        for dt in deltas {
            machine.target_mut().log.clear();
            machine.process(dt).unwrap();

            let current = *machine.state().as_named().unwrap();
            let log = &machine.target().log;
            let in_states = log.iter().filter(|(e, _, _)| *e == StateEvent::InState).count();

            prop_assert_eq!(in_states, 1);
            prop_assert_eq!(log.last(), Some(&(StateEvent::InState, current, dt)));
        }
    }

    #[test]
    fn at_most_one_transition_per_cycle(
        mut machine in arbitrary_machine(),
        cycles in 1..20usize,
    ) {
        machine.process(0.016).unwrap();

        for _ in 0..cycles {
            let before = *machine.state().as_named().unwrap();
            machine.target_mut().log.clear();
            machine.process(0.016).unwrap();
            let after = *machine.state().as_named().unwrap();

            let log = &machine.target().log;
            let exits: Vec<Node> = log
                .iter()
                .filter(|(e, _, _)| *e == StateEvent::OnExit)
                .map(|(_, s, _)| *s)
                .collect();
            let entries: Vec<Node> = log
                .iter()
                .filter(|(e, _, _)| *e == StateEvent::OnEntry)
                .map(|(_, s, _)| *s)
                .collect();

            prop_assert!(exits.len() <= 1);
            prop_assert_eq!(exits.len(), entries.len());
            if let (Some(exit), Some(entry)) = (exits.first(), entries.first()) {
                prop_assert_eq!(*exit, before);
                prop_assert_eq!(*entry, after);
                prop_assert!(machine.topology().guard(&before, &after).is_some());
            }
        }
    }

    #[test]
    fn reset_reproduces_first_cycle(
        mut machine in arbitrary_machine(),
        warmup in 0..10usize,
        dt in 0.0..10.0f64,
    ) {
        for _ in 0..warmup {
            machine.process(0.5).unwrap();
        }

        machine.reset();
        prop_assert!(machine.state().is_uninitialized());

        machine.target_mut().log.clear();
        let evaluations = machine.target().evaluations;
        machine.process(dt).unwrap();

        let initial = *machine.initial();
        prop_assert!(machine.state().is(&initial));
        prop_assert_eq!(machine.target().evaluations, evaluations);
        prop_assert_eq!(
            &machine.target().log,
            &vec![
                (StateEvent::OnEntry, initial, 0.0),
                (StateEvent::InState, initial, 0.0),
            ]
        );
    }

    #[test]
    fn first_open_edge_in_insertion_order_wins(
        targets in prop::collection::vec(arbitrary_node(), 1..6),
        open_mask in prop::collection::vec(any::<bool>(), 6),
    ) {
        let edges: Vec<(Node, Node)> = targets.iter().map(|to| (Node::N0, *to)).collect();
        let open: Vec<(Node, Node)> = edges
            .iter()
            .zip(open_mask)
            .filter(|(_, open)| *open)
            .map(|(edge, _)| *edge)
            .collect();
        let mut machine = build(Node::N0, &edges, open.clone());
        machine.process(0.1).unwrap();
        machine.process(0.1).unwrap();

        // Redefined pairs keep their first position, so the winner is the
        // first distinct edge that is open.
        let mut distinct: Vec<(Node, Node)> = Vec::new();
        for edge in &edges {
            if !distinct.contains(edge) {
                distinct.push(*edge);
            }
        }
        let expected = distinct
            .iter()
            .find(|edge| open.contains(*edge))
            .map(|(_, to)| *to)
            .unwrap_or(Node::N0);

        prop_assert!(machine.state().is(&expected));
    }
}
