use crate::directions::output::{format_distance, format_duration};
use crate::directions::{decode_alternatives, DirectionsError, Step};
use crate::error::Error;

const TWO_ROUTES: &str = r#"{
    "routes": [
        {
            "legs": [
                {
                    "steps": [
                        {
                            "start_location": { "lat": -12.0464, "lng": -77.0428 },
                            "end_location": { "lat": -12.0500, "lng": -77.0300 },
                            "distance": { "value": 500, "text": "0.5 km" },
                            "duration": { "value": 120, "text": "2 min" },
                            "html_instructions": "Dirígete al <b>sur</b>"
                        },
                        {
                            "start_location": { "lat": -12.0500, "lng": -77.0300 },
                            "end_location": { "lat": -12.0550, "lng": -77.0200 },
                            "distance": { "value": 700, "text": "0.7 km" },
                            "duration": { "value": 180, "text": "3 min" },
                            "html_instructions": "Gira a la <b>izquierda</b>"
                        }
                    ]
                }
            ]
        },
        {
            "legs": [
                {
                    "steps": [
                        {
                            "start_location": { "lat": -12.0464, "lng": -77.0428 },
                            "end_location": { "lat": -12.0550, "lng": -77.0200 },
                            "distance": { "value": 1400, "text": "1.4 km" },
                            "duration": { "value": 300, "text": "5 min" }
                        }
                    ]
                }
            ]
        }
    ]
}"#;

#[test_log::test]
fn decodes_every_route_alternative() {
    let alternatives = decode_alternatives(TWO_ROUTES).expect("Payload must decode");

    assert_eq!(alternatives.len(), 2, "Expected both route alternatives");
    assert_eq!(alternatives[0].steps().len(), 2);
    assert_eq!(alternatives[1].steps().len(), 1);

    let first = &alternatives[0].steps()[0];
    assert_eq!(first.start.lat(), -12.0464);
    assert_eq!(first.start.lng(), -77.0428);
    assert_eq!(first.distance, 500);
    assert_eq!(first.duration, 120);
    assert_eq!(first.instruction, "Dirígete al <b>sur</b>");
    assert_eq!(first.distance_text, "0.5 km");
    assert_eq!(first.duration_text, "2 min");
}

#[test]
fn missing_instruction_and_text_default_to_empty() {
    let alternatives = decode_alternatives(TWO_ROUTES).expect("Payload must decode");

    let bare = &alternatives[1].steps()[0];
    assert_eq!(bare.instruction, "");
    assert_eq!(bare.distance_text, "1.4 km");
}

#[test]
fn only_the_first_leg_is_read() {
    let payload = r#"{
        "routes": [
            {
                "legs": [
                    {
                        "steps": [
                            {
                                "start_location": { "lat": -12.0, "lng": -77.0 },
                                "end_location": { "lat": -12.1, "lng": -77.1 },
                                "distance": { "value": 100 },
                                "duration": { "value": 60 }
                            }
                        ]
                    },
                    {
                        "steps": [
                            {
                                "start_location": { "lat": -12.1, "lng": -77.1 },
                                "end_location": { "lat": -12.2, "lng": -77.2 },
                                "distance": { "value": 900 },
                                "duration": { "value": 600 }
                            }
                        ]
                    }
                ]
            }
        ]
    }"#;

    let alternatives = decode_alternatives(payload).expect("Payload must decode");
    assert_eq!(alternatives.len(), 1);
    assert_eq!(
        alternatives[0].steps().len(),
        1,
        "Second leg must be dropped"
    );
}

#[test]
fn route_without_legs_is_rejected() {
    let payload = r#"{ "routes": [ { "legs": [] } ] }"#;

    let error = decode_alternatives(payload).expect_err("Legless route must fail");
    assert!(matches!(
        error,
        Error::Directions(DirectionsError::NoLegs { route: 0 })
    ));
}

#[test]
fn empty_routes_decode_to_no_alternatives() {
    let alternatives = decode_alternatives(r#"{ "routes": [] }"#).expect("Payload must decode");
    assert!(alternatives.is_empty());
}

#[test]
fn out_of_range_coordinate_is_rejected() {
    let payload = r#"{
        "routes": [
            {
                "legs": [
                    {
                        "steps": [
                            {
                                "start_location": { "lat": 91.0, "lng": -77.0 },
                                "end_location": { "lat": -12.1, "lng": -77.1 },
                                "distance": { "value": 100 },
                                "duration": { "value": 60 }
                            }
                        ]
                    }
                ]
            }
        ]
    }"#;

    let error = decode_alternatives(payload).expect_err("Latitude 91 must fail");
    assert!(matches!(
        error,
        Error::Directions(DirectionsError::Coordinate {
            route: 0,
            step: 0,
            field: "start_location",
            ..
        })
    ));
}

#[test]
fn negative_quantity_is_rejected() {
    let payload = r#"{
        "routes": [
            {
                "legs": [
                    {
                        "steps": [
                            {
                                "start_location": { "lat": -12.0, "lng": -77.0 },
                                "end_location": { "lat": -12.1, "lng": -77.1 },
                                "distance": { "value": -5 },
                                "duration": { "value": 60 }
                            }
                        ]
                    }
                ]
            }
        ]
    }"#;

    let error = decode_alternatives(payload).expect_err("Negative distance must fail");
    assert!(matches!(
        error,
        Error::Directions(DirectionsError::InvalidQuantity {
            field: "distance",
            value: -5,
            ..
        })
    ));
}

#[test]
fn malformed_payload_is_a_json_error() {
    let error = decode_alternatives("{ not json").expect_err("Malformed payload must fail");
    assert!(matches!(
        error,
        Error::Directions(DirectionsError::Json(_))
    ));
}

#[test]
fn plain_instruction_strips_bold_markup_only() {
    let step = Step {
        start: (0.0, 0.0).into(),
        end: (1.0, 1.0).into(),
        distance: 10,
        duration: 10,
        instruction: "Gira a la <b>derecha</b> en <div>Av. Arequipa</div>".to_string(),
        distance_text: String::new(),
        duration_text: String::new(),
    };

    assert_eq!(
        step.plain_instruction(),
        "Gira a la derecha en <div>Av. Arequipa</div>"
    );
}

#[test]
fn distance_formats_switch_units_at_a_kilometre() {
    assert_eq!(format_distance(0), "0 m");
    assert_eq!(format_distance(999), "999 m");
    assert_eq!(format_distance(1000), "1.0 km");
    assert_eq!(format_distance(1250), "1.2 km");
    assert_eq!(format_distance(13780), "13.8 km");
}

#[test]
fn duration_formats_switch_units_at_an_hour() {
    assert_eq!(format_duration(0), "0 min");
    assert_eq!(format_duration(59), "0 min");
    assert_eq!(format_duration(60), "1 min");
    assert_eq!(format_duration(3599), "59 min");
    assert_eq!(format_duration(3600), "1 hr 0 min");
    assert_eq!(format_duration(5400), "1 hr 30 min");
    assert_eq!(format_duration(7260), "2 hr 1 min");
}
