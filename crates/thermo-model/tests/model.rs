//! Integration tests for the public model API.

use thermo_model::{Direction, Format, ProfileId, RenamePlan};

#[test]
fn every_profile_starts_rising_and_ends_falling() {
    for id in ProfileId::ALL {
        let profile = id.profile();
        let first = profile.step(1).expect("first step");
        let last = profile.step(profile.len()).expect("last step");
        assert_eq!(first.direction, Direction::Rising, "{id}");
        assert_eq!(last.direction, Direction::Falling, "{id}");
        assert_eq!(first.temperature, 25);
        assert_eq!(last.temperature, 25);
    }
}

#[test]
fn direction_flips_exactly_once() {
    for id in ProfileId::ALL {
        let markers: Vec<&str> = id
            .profile()
            .steps()
            .map(|step| step.direction.marker())
            .collect();
        let flips = markers.windows(2).filter(|pair| pair[0] != pair[1]).count();
        assert_eq!(flips, 1, "{id}: {markers:?}");
    }
}

#[test]
fn nine_step_profiles_have_expected_stems() {
    let stems: Vec<String> = ProfileId::Steps9A
        .profile()
        .steps()
        .map(|step| Format::Tabular.file_name(&step.stem()))
        .collect();
    assert_eq!(
        stems,
        vec![
            "0_25.csv", "0_50.csv", "0_100.csv", "0_150.csv", "0_180.csv", "1_150.csv",
            "1_100.csv", "1_50.csv", "1_25.csv",
        ]
    );
}

#[test]
fn selectors_round_trip_through_parsing() {
    for id in ProfileId::ALL {
        let parsed: ProfileId = id.selector().to_string().parse().expect("parse selector");
        assert_eq!(parsed, id);
        let parsed: ProfileId = id.peak_label().parse().expect("parse peak label");
        assert_eq!(parsed, id);
    }
}

#[test]
fn plan_keeps_insertion_order() {
    let mut plan = RenamePlan::new();
    plan.push("b_5.tif", "1.tif").expect("first");
    plan.push("a_9.tif", "2.tif").expect("second");
    let froms: Vec<&str> = plan.entries().iter().map(|e| e.from.as_str()).collect();
    assert_eq!(froms, vec!["b_5.tif", "a_9.tif"]);
}
