//! Tests for mask rule and mask-set types

use super::*;

fn red_rule(threshold: f32) -> PickedColor {
    PickedColor {
        color: [1.0, 0.0, 0.0],
        threshold,
        h_coeff: 1.0,
        s_coeff: 1.0,
        v_coeff: 1.0,
    }
}

#[test]
fn test_picked_color_equality_is_structural() {
    let a = red_rule(0.25);
    let b = red_rule(0.25);
    assert_eq!(a, b);

    let mut c = red_rule(0.25);
    c.v_coeff = 0.5;
    assert_ne!(a, c);

    let mut d = red_rule(0.25);
    d.threshold = 0.250001;
    assert_ne!(a, d);
}

#[test]
fn test_mask_definition_equality() {
    let a = MaskDefinition {
        name: "skin".to_string(),
        picked_colors: vec![red_rule(0.1), red_rule(0.2)],
    };
    let b = a.clone();
    assert_eq!(a, b);

    // Same rules, different order
    let c = MaskDefinition {
        name: "skin".to_string(),
        picked_colors: vec![red_rule(0.2), red_rule(0.1)],
    };
    assert_ne!(a, c);

    // Same rules, different name
    let d = MaskDefinition {
        name: "hair".to_string(),
        picked_colors: a.picked_colors.clone(),
    };
    assert_ne!(a, d);
}

#[test]
fn test_empty_name_is_inactive() {
    let mask = MaskDefinition {
        name: String::new(),
        picked_colors: vec![red_rule(0.5)],
    };
    assert!(!mask.is_active());

    let mask = MaskDefinition {
        name: "eyes".to_string(),
        picked_colors: Vec::new(),
    };
    assert!(mask.is_active());
}

#[test]
fn test_rule_validation() {
    assert!(red_rule(0.0).validate().is_ok());

    let mut rule = red_rule(0.1);
    rule.threshold = -0.01;
    assert!(rule.validate().is_err());

    let mut rule = red_rule(0.1);
    rule.h_coeff = 1.5;
    assert!(rule.validate().is_err());

    let mut rule = red_rule(0.1);
    rule.s_coeff = -0.1;
    assert!(rule.validate().is_err());
}

#[test]
fn test_set_validation_rejects_duplicate_names() {
    let set = MaskSet {
        masks: vec![
            MaskDefinition {
                name: "skin".to_string(),
                picked_colors: vec![red_rule(0.1)],
            },
            MaskDefinition {
                name: "skin".to_string(),
                picked_colors: vec![red_rule(0.2)],
            },
        ],
        ..Default::default()
    };
    assert!(set.validate().is_err());

    // Multiple inactive definitions are fine
    let set = MaskSet {
        masks: vec![
            MaskDefinition {
                name: String::new(),
                picked_colors: Vec::new(),
            },
            MaskDefinition {
                name: String::new(),
                picked_colors: Vec::new(),
            },
        ],
        ..Default::default()
    };
    assert!(set.validate().is_ok());
}

#[test]
fn test_active_masks_skips_empty_names() {
    let set = MaskSet {
        masks: vec![
            MaskDefinition {
                name: "skin".to_string(),
                picked_colors: Vec::new(),
            },
            MaskDefinition {
                name: String::new(),
                picked_colors: vec![red_rule(0.3)],
            },
        ],
        ..Default::default()
    };

    let names: Vec<&str> = set.active_masks().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["skin"]);
}

#[test]
fn test_rule_defaults() {
    let rule = PickedColor::default();
    assert_eq!(rule.threshold, 0.0);
    assert_eq!(rule.h_coeff, 1.0);
    assert_eq!(rule.s_coeff, 0.1);
    assert_eq!(rule.v_coeff, 0.1);

    let set = MaskSet::default();
    assert!(!set.desaturate);
    assert_eq!(set.preview_height, 100);
}
