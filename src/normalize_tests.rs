//! Tests for display-name-to-catalog-key normalization.

use super::Normalizer;

#[test]
fn lowercases_and_replaces_spaces() {
    let n = Normalizer::default();
    assert_eq!(n.normalize("Primed Continuity"), "primed_continuity");
}

#[test]
fn trims_surrounding_whitespace() {
    let n = Normalizer::default();
    assert_eq!(n.normalize("  vitality  "), "vitality");
}

#[test]
fn deterministic_across_calls() {
    let n = Normalizer::default();
    let first = n.normalize("Streamlined Form");
    let second = n.normalize("Streamlined Form");
    assert_eq!(first, second);
}

#[test]
fn substitution_rules_apply_in_order() {
    let n = Normalizer::default();
    // & -> and, . removed, - -> _, apostrophes removed
    assert_eq!(n.normalize("Fire & Ice"), "fire_and_ice");
    assert_eq!(n.normalize("Mk. II"), "mk_ii");
    assert_eq!(n.normalize("Semi-Rifle"), "semi_rifle");
    assert_eq!(n.normalize("Hunter's Mark"), "hunters_mark");
    assert_eq!(n.normalize("Hunter’s Mark"), "hunters_mark");
}

#[test]
fn orokin_prefix_renamed_to_corrupted() {
    let n = Normalizer::default();
    assert_eq!(n.normalize("Orokin Cell"), "corrupted_cell");
}

#[test]
fn special_case_bypasses_mechanical_rules() {
    let n = Normalizer::default();
    // The mechanical transform would give semi_shotgun_cannonade
    assert_eq!(
        n.normalize("Semi-Shotgun Cannonade"),
        "shotgun_cannonade"
    );
}

#[test]
fn special_case_keeps_encoded_apostrophe() {
    let n = Normalizer::default();
    assert_eq!(
        n.normalize("Summoner's Wrath"),
        "summoner%E2%80%99s_wrath"
    );
    assert_eq!(
        n.normalize("Summoner’s Wrath"),
        "summoner%E2%80%99s_wrath"
    );
}

#[test]
fn component_parts_get_blueprint_suffix() {
    let n = Normalizer::default();
    assert_eq!(n.normalize("Mirage Prime Systems"), "mirage_prime_systems_blueprint");
    assert_eq!(n.normalize("Nova Prime Chassis"), "nova_prime_chassis_blueprint");
    assert_eq!(n.normalize("Itzal Harness"), "itzal_harness_blueprint");
    assert_eq!(n.normalize("Amesha Wings"), "amesha_wings_blueprint");
}

#[test]
fn suffix_exceptions_stay_assembled() {
    let n = Normalizer::default();
    assert_eq!(n.normalize("Odonata Prime Systems"), "odonata_prime_systems");
    assert_eq!(n.normalize("Odonata Prime Harness"), "odonata_prime_harness");
    assert_eq!(n.normalize("Odonata Prime Wings"), "odonata_prime_wings");
}

#[test]
fn non_part_names_are_untouched_by_suffix_rule() {
    let n = Normalizer::default();
    assert_eq!(n.normalize("Ayatan Anasa Sculpture"), "ayatan_anasa_sculpture");
}
