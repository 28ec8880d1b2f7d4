//! Integration test: authored data -> sources -> statistic -> IWR
//!
//! Exercises the flow a derived-data pass goes through: rule elements and
//! base checks contribute modifiers, the statistic resolves them against the
//! current roll options, and incoming damage runs through the entity's IWR.

use modifier_core::config::{default_iwr_vocabulary, default_labels, parse_iwr_vocabulary};
use modifier_core::iwr::{IwrDatum, IwrKind, IwrProfile, IwrRule, IwrRuleSet};
use modifier_core::modifier::{AbilityModifier, Modifier, ModifierType, ProficiencyModifier};
use modifier_core::source::{BaseCheckSource, ModifierSource, RuleElementSource};
use modifier_core::statistic::{resolve, StatisticModifier};
use modifier_core::types::{Ability, RollOptions};

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("modifier_core=debug")
        .with_test_writer()
        .try_init();
}

fn options(tags: &[&str]) -> RollOptions {
    tags.iter().copied().collect()
}

#[test]
fn test_stacking_example_totals_nine() {
    init_logging();

    let modifiers = vec![
        AbilityModifier::from_score(Ability::Dex, 14),
        ProficiencyModifier::from_level_and_rank(3, 1),
        Modifier::new("Status Bonus", ModifierType::Status, 2),
        Modifier::new("Status Penalty", ModifierType::Status, -1),
        Modifier::new("Item Bonus", ModifierType::Item, 2),
        Modifier::new("Item Penalty", ModifierType::Item, -1),
        Modifier::new("Circumstance Bonus", ModifierType::Circumstance, 2),
        Modifier::new("Circumstance Penalty", ModifierType::Circumstance, -1),
        Modifier::new("Untyped Penalty", ModifierType::Untyped, -1),
    ];

    let result = resolve("attack", &modifiers, &RollOptions::new());
    assert_eq!(result.total, 9);
}

#[test]
fn test_equal_status_bonuses() {
    let modifiers = vec![
        Modifier::new("Bless", ModifierType::Status, 2),
        Modifier::new("Heroism", ModifierType::Status, 2),
    ];

    let result = resolve("attack", &modifiers, &RollOptions::new());
    assert_eq!(result.total, 2);
    assert!(!result.get("Bless").unwrap().enabled);
    assert!(result.get("Heroism").unwrap().enabled);
}

#[test]
fn test_resolution_is_idempotent() {
    let statistic = StatisticModifier::new(
        "fortitude",
        vec![
            Modifier::new("a", ModifierType::Item, 1),
            Modifier::new("b", ModifierType::Item, 1),
            Modifier::new("c", ModifierType::Status, -2),
        ],
    );
    let tags = options(&["self:armored"]);
    assert_eq!(statistic.resolve(&tags), statistic.resolve(&tags));
}

#[test]
fn test_sources_to_breakdown() {
    init_logging();

    let bless = RuleElementSource::from_json(
        r#"{
            "id": "bless",
            "modifiers": [
                {"name": "Bless", "type": "status", "value": 1, "predicate": ["attack-roll"]}
            ]
        }"#,
    )
    .unwrap();
    let flanked = RuleElementSource::from_json(
        r#"{
            "id": "flanking",
            "modifiers": [
                {"name": "Flat-Footed Target", "type": "circumstance", "value": 2,
                 "predicate": {"all": ["target:condition:flat-footed"], "not": ["target:immune:flanking"]}}
            ]
        }"#,
    )
    .unwrap();

    let sources: Vec<Box<dyn ModifierSource>> = vec![
        Box::new(bless),
        Box::new(flanked),
        Box::new(BaseCheckSource::new(Ability::Str, 18, 5, 2)),
    ];
    let statistic = StatisticModifier::from_sources("strike", &sources);

    // Base check sorts first regardless of declaration order
    assert_eq!(statistic.modifiers()[0].name, "str");

    let tags = options(&["attack-roll", "target:condition:flat-footed"]);
    let result = statistic.resolve(&tags);
    // str +4, expert at level 5 +9, bless +1, flat-footed +2
    assert_eq!(result.total, 16);
    assert_eq!(
        result.breakdown(&default_labels()),
        "Strength +4, Expert +9, Bless +1, Flat-Footed Target +2"
    );

    let immune = options(&[
        "attack-roll",
        "target:condition:flat-footed",
        "target:immune:flanking",
    ]);
    assert_eq!(statistic.resolve(&immune).total, 14);
}

#[test]
fn test_invalid_rank_is_untrained() {
    init_logging();
    let clamped = ProficiencyModifier::from_level_and_rank(8, 9);
    assert_eq!(clamped, ProficiencyModifier::from_level_and_rank(8, 0));
}

#[test]
fn test_resistance_doubling_scenario() {
    let vocabulary = default_iwr_vocabulary();
    let resistance = IwrDatum::build(
        IwrKind::Resistance,
        IwrRule::new("fire").with_value(5).with_double_vs(["good"]),
        &vocabulary,
    )
    .unwrap();

    assert_eq!(
        resistance.doubled_value(&options(&["damage:type:fire", "damage:trait:good"])),
        10
    );
    assert_eq!(resistance.doubled_value(&options(&["damage:type:fire"])), 5);
}

#[test]
fn test_immunity_exception_scenario() {
    let vocabulary = default_iwr_vocabulary();
    let immunity = IwrDatum::build(
        IwrKind::Immunity,
        IwrRule::new("fire").with_exceptions(["persistent"]),
        &vocabulary,
    )
    .unwrap();

    assert!(!immunity.test(&options(&["damage:type:fire", "damage:persistent"])));
    assert!(immunity.test(&options(&["damage:type:fire"])));
}

#[test]
fn test_profile_from_toml_rules() {
    init_logging();

    let rules: IwrRuleSet = toml::from_str(
        r#"
[[immunities]]
type = "object-immunities"

[[weaknesses]]
type = "silver"
value = 5

[[resistances]]
type = "physical"
value = 5
exceptions = ["adamantine"]
"#,
    )
    .unwrap();
    let profile = IwrProfile::from_rules(rules, &default_iwr_vocabulary()).unwrap();

    let mithral_blade = options(&["damage", "damage:type:slashing", "damage:material:mithral"]);
    // silver weakness via mithral aliasing (+5), physical resistance (-5)
    assert_eq!(profile.apply(12, &mithral_blade).adjusted, 12);

    let poison = options(&["damage", "damage:type:poison"]);
    assert!(profile.apply(12, &poison).is_immune());

    let unknown = options(&["damage", "damage:type:eldritch"]);
    assert_eq!(profile.apply(12, &unknown).adjusted, 12);
}

#[test]
fn test_custom_vocabulary_is_explicit() {
    let vocabulary = parse_iwr_vocabulary(
        r#"
[[groups]]
prefix = "energy"
slugs = ["fire"]
"#,
    )
    .unwrap();

    let weakness = IwrDatum::build(
        IwrKind::Weakness,
        IwrRule::new("fire").with_value(2),
        &vocabulary,
    )
    .unwrap();
    assert!(weakness.test(&options(&["energy:fire"])));
    assert!(!weakness.test(&options(&["damage:type:fire"])));
}
