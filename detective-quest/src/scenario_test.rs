//! End-to-end scenarios: scripted runs through the fixed case, from the
//! first room to the verdict.

use crate::case;
use crate::clues::ClueIndex;
use crate::events::Event;
use crate::explore::{self, Command, Direction, Exploration, LeafPolicy, ScriptedSource};
use crate::rooms::Room;
use crate::suspects::DEFAULT_TABLE_CAPACITY;
use crate::verdict::{self, Verdict};

fn scripted_run(
    tokens: &[&str],
    policy: LeafPolicy,
) -> (ClueIndex, Vec<Event>, String, Vec<Direction>) {
    let mansion = case::mansion();
    let mut clues = ClueIndex::new();
    let mut source = ScriptedSource::new(tokens.iter().copied());
    let mut events: Vec<Event> = Vec::new();

    let exploration = explore::run(&mansion, &mut clues, &mut source, &mut events, policy)
        .expect("scripted run failed");

    let room = exploration.current_room().name().to_string();
    let trail = exploration.trail().to_vec();
    (clues, events, room, trail)
}

fn follow<'m>(root: &'m Room, trail: &[Direction]) -> &'m Room {
    let mut room = root;
    for direction in trail {
        room = match direction {
            Direction::Left => room.left().expect("trail step without left child"),
            Direction::Right => room.right().expect("trail step without right child"),
        };
    }
    room
}

#[test]
fn library_wing_walk_collects_exactly_two_clues() {
    let (clues, events, room, _) = scripted_run(&["e", "e", "s"], LeafPolicy::RequireQuit);

    assert_eq!(room, "Sala de Estar");
    assert_eq!(
        clues.iter().collect::<Vec<_>>(),
        vec!["Livro fora do lugar", "Pegadas de lama no tapete"]
    );

    let entered: Vec<&str> = events
        .iter()
        .filter_map(|event| match event {
            Event::RoomEntered { name } => Some(name.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(entered, vec!["Hall de Entrada", "Biblioteca", "Sala de Estar"]);
    assert_eq!(events.last(), Some(&Event::ExplorationEnded));
}

#[test]
fn invalid_tokens_reprompt_without_moving() {
    let (_, events, room, trail) =
        scripted_run(&["x", "d", "e", "oops", "s"], LeafPolicy::RequireQuit);

    assert_eq!(room, "Jardim");
    assert_eq!(trail, vec![Direction::Right, Direction::Left]);

    let rejected: Vec<&str> = events
        .iter()
        .filter_map(|event| match event {
            Event::InvalidChoice { input } => Some(input.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(rejected, vec!["x", "oops"]);
}

#[test]
fn replaying_the_trail_reaches_the_current_room() {
    let mansion = case::mansion();
    for tokens in [
        vec!["s"],
        vec!["e", "s"],
        vec!["d", "d", "s"],
        vec!["e", "d", "s"],
        vec!["x", "d", "e", "s"],
    ] {
        let (_, _, room, trail) = scripted_run(&tokens, LeafPolicy::RequireQuit);
        assert_eq!(
            follow(&mansion, &trail).name(),
            room,
            "tokens {tokens:?} trail {trail:?}"
        );
    }
}

#[test]
fn leaf_policy_decides_whether_a_dead_end_ends_the_run() {
    let (_, events, room, _) = scripted_run(&["e", "e"], LeafPolicy::AutoQuit);
    assert_eq!(room, "Sala de Estar");
    assert_eq!(
        events
            .iter()
            .filter(|event| **event == Event::ExplorationEnded)
            .count(),
        1
    );

    let mansion = case::mansion();
    let mut clues = ClueIndex::new();
    let (mut exploration, _) = Exploration::start(&mansion, &mut clues, LeafPolicy::RequireQuit);
    exploration.step(&mut clues, Command::Left);
    exploration.step(&mut clues, Command::Left);
    assert_eq!(exploration.current_room().name(), "Sala de Estar");
    assert!(!exploration.is_finished());
}

#[test]
fn green_case_convicts_green_and_clears_white() {
    let directory = case::suspect_directory(DEFAULT_TABLE_CAPACITY).unwrap();
    let mut clues = ClueIndex::new();
    for clue in [
        "Pegadas de lama no tapete",
        "Livro fora do lugar",
        "Janela aberta",
        "Pegadas recentes na terra",
    ] {
        clues.insert(clue);
    }

    let judgement = verdict::evaluate(&clues, &directory, "Sr. Green");
    assert_eq!(judgement.match_count, 3);
    assert_eq!(judgement.verdict, Verdict::Guilty);

    let judgement = verdict::evaluate(&clues, &directory, "Sra. White");
    assert_eq!(judgement.match_count, 1);
    assert_eq!(judgement.verdict, Verdict::Rejected);
}

#[test]
fn empty_index_rejects_any_accusation() {
    let directory = case::suspect_directory(DEFAULT_TABLE_CAPACITY).unwrap();
    let clues = ClueIndex::new();

    for accused in ["Sr. Green", "Sra. White", ""] {
        let judgement = verdict::evaluate(&clues, &directory, accused);
        assert_eq!(judgement.match_count, 0);
        assert_eq!(judgement.verdict, Verdict::Rejected);
    }
}

#[test]
fn attic_route_is_enough_to_convict_green() {
    // Hall -> Biblioteca -> Sótão picks up two of Sr. Green's clues.
    let (clues, _, _, _) = scripted_run(&["e", "d", "s"], LeafPolicy::RequireQuit);
    let directory = case::suspect_directory(DEFAULT_TABLE_CAPACITY).unwrap();

    let listing = clues.report(&directory);
    assert_eq!(
        listing,
        vec![
            Event::ClueListed {
                text: "Janela aberta".to_string(),
                suspect: Some("Sr. Green".to_string()),
            },
            Event::ClueListed {
                text: "Livro fora do lugar".to_string(),
                suspect: Some("Sra. White".to_string()),
            },
            Event::ClueListed {
                text: "Pegadas de lama no tapete".to_string(),
                suspect: Some("Sr. Green".to_string()),
            },
        ]
    );

    let judgement = verdict::evaluate(&clues, &directory, "Sr. Green");
    assert_eq!(judgement.match_count, 2);
    assert!(judgement.guilty());
    assert_eq!(
        judgement.to_event(),
        Event::Verdict {
            accused: "Sr. Green".to_string(),
            match_count: 2,
            guilty: true,
        }
    );
}
