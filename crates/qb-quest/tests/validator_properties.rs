//! Property tests for quest validation.

use proptest::prelude::*;
use qb_core::{
    CharacterId, CharacterSheet, Goal, ProgressEntry, Quest, Scenario, ScenarioId, ScenarioState,
    ScenarioStore,
};
use qb_quest::QuestValidator;

const SCENARIOS: [&str; 4] = ["1", "2", "3", "4"];

fn arb_scenario_state() -> impl Strategy<Value = ScenarioState> {
    prop_oneof![
        Just(ScenarioState::Hidden),
        Just(ScenarioState::Incomplete),
        Just(ScenarioState::Complete),
        Just(ScenarioState::Blocked),
        Just(ScenarioState::Required),
    ]
}

fn arb_goal() -> impl Strategy<Value = Goal> {
    prop_oneof![
        prop::collection::vec(any::<bool>(), 0..5).prop_map(|value| Goal::Checkbox { value }),
        (0u8..10, 0u8..10).prop_map(|(value, target)| Goal::Number {
            value: f64::from(value),
            target: f64::from(target),
        }),
        Just(Goal::Unknown),
    ]
}

fn arb_entry() -> impl Strategy<Value = ProgressEntry> {
    (arb_goal(), prop::option::of(prop::sample::select(SCENARIOS.to_vec()))).prop_map(
        |(goal, scenario)| ProgressEntry {
            goal,
            scenario_unlock: scenario.map(ScenarioId::from),
        },
    )
}

fn arb_quest() -> impl Strategy<Value = Quest> {
    (
        prop::collection::vec(arb_entry(), 0..6),
        prop::option::of(prop::sample::select(vec!["hero", "ghost"])),
    )
        .prop_map(|(progress, character)| Quest {
            name: "generated".to_string(),
            progress,
            character_unlock: character.map(CharacterId::from),
        })
}

fn arb_store() -> impl Strategy<Value = ScenarioStore> {
    prop::collection::vec(arb_scenario_state(), SCENARIOS.len()).prop_map(|states| {
        SCENARIOS
            .iter()
            .zip(states)
            .map(|(id, state)| Scenario::new(*id, format!("Scenario {id}")).with_state(state))
            .collect()
    })
}

fn states(store: &ScenarioStore) -> Vec<Option<ScenarioState>> {
    SCENARIOS
        .iter()
        .map(|id| store.state_of(&ScenarioId::from(*id)))
        .collect()
}

proptest! {
    #[test]
    fn quest_met_iff_every_goal_met(quest in arb_quest(), store in arb_store()) {
        let expected = quest.progress.iter().all(|e| e.goal.is_met());
        let mut validator = QuestValidator::new(store);
        let mut sheet = CharacterSheet::with_unlock_slots(["hero"]);
        prop_assert_eq!(validator.validate(&quest, &mut sheet), expected);
    }

    #[test]
    fn validate_is_idempotent(quest in arb_quest(), store in arb_store()) {
        let mut validator = QuestValidator::new(store);
        let mut sheet = CharacterSheet::with_unlock_slots(["hero"]);

        let first = validator.validate(&quest, &mut sheet);
        let sheet_once = sheet.clone();
        let states_once = states(validator.repository());

        let second = validator.validate(&quest, &mut sheet);
        prop_assert_eq!(first, second);
        prop_assert_eq!(sheet, sheet_once);
        prop_assert_eq!(states(validator.repository()), states_once);
    }

    #[test]
    fn scenarios_change_only_from_hidden_when_goal_met(quest in arb_quest(), store in arb_store()) {
        let before = states(&store);
        let mut validator = QuestValidator::new(store);
        let mut sheet = CharacterSheet::default();
        validator.validate(&quest, &mut sheet);
        let after = states(validator.repository());

        for (i, id) in SCENARIOS.iter().enumerate() {
            let unlocked_by_met_goal = quest.progress.iter().any(|e| {
                e.goal.is_met() && e.scenario_unlock.as_ref().is_some_and(|s| s.as_str() == *id)
            });
            let expected = if unlocked_by_met_goal && before[i] == Some(ScenarioState::Hidden) {
                Some(ScenarioState::Incomplete)
            } else {
                before[i]
            };
            prop_assert_eq!(after[i], expected);
        }
    }

    #[test]
    fn character_unlocked_only_with_slot_and_met_quest(quest in arb_quest(), store in arb_store()) {
        let met = quest.progress.iter().all(|e| e.goal.is_met());
        let mut validator = QuestValidator::new(store);
        let mut sheet = CharacterSheet::with_unlock_slots(["hero"]);
        validator.validate(&quest, &mut sheet);

        let hero_targeted = quest.character_unlock.as_ref().is_some_and(|c| c.as_str() == "hero");
        prop_assert_eq!(sheet.is_unlocked(&CharacterId::from("hero")), met && hero_targeted);
        prop_assert_eq!(sheet.character_unlocks.len(), 1);
    }
}

#[test]
fn empty_quest_is_always_met() {
    let mut validator = QuestValidator::new(ScenarioStore::new());
    let mut sheet = CharacterSheet::default();
    assert!(validator.validate(&Quest::default(), &mut sheet));
}

#[test]
fn quest_from_json_unlocks_in_place() {
    let quest: Quest = serde_json::from_str(
        r#"{
            "name": "Aberrant Slayer",
            "progress": [
                {"type": "checkbox", "value": [true, true, true, true, true, true]},
                {"type": "number", "value": 2, "target": 2, "scenario_unlock": "1"}
            ],
            "character_unlock": "hero"
        }"#,
    )
    .unwrap();
    let mut sheet: CharacterSheet =
        serde_json::from_str(r#"{"characterUnlocks": {"hero": false}}"#).unwrap();
    let store: ScenarioStore = [Scenario::new("1", "Black Barrow")].into_iter().collect();

    let mut validator = QuestValidator::new(store);
    let report = validator.evaluate(&quest, &mut sheet).unwrap();

    assert!(report.met);
    assert_eq!(report.goals_met(), 2);
    assert_eq!(report.character_unlocked, Some(CharacterId::from("hero")));
    assert_eq!(
        validator.repository().state_of(&ScenarioId::from("1")),
        Some(ScenarioState::Incomplete)
    );

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["scenarios_unlocked"], serde_json::json!(["1"]));
}
