use blogwright::{Audience, GenerationRequest, Tone, WritingStyle, compose_prompt};
use proptest::prelude::*;

fn label() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(vec![
            "Professional",
            "Conversational",
            "Authoritative",
            "Humorous",
            "General Readers",
            "Students",
        ])
        .prop_map(|s| s.to_string()),
        ".{0,24}",
    ]
}

proptest! {
    #[test]
    fn composed_prompt_contains_every_value_verbatim(
        topic in ".{0,80}",
        word_count in any::<u32>(),
        style in label(),
        tone in label(),
        audience in label(),
    ) {
        let request = GenerationRequest::new(topic.clone())
            .with_word_count(word_count)
            .with_style(WritingStyle::from_label(&style))
            .with_tone(Tone::from_label(&tone))
            .with_audience(Audience::from_label(&audience));

        let prompt = compose_prompt(&request).unwrap();

        prop_assert!(prompt.contains(&topic));
        prop_assert!(prompt.contains(&word_count.to_string()));
        // Labels outside the fixed sets reach the prompt exactly as typed; labels that
        // match a fixed entry (in any case) are rendered in their canonical spelling.
        let expected_style = match WritingStyle::parse_known(&style) {
            Some(known) => known.label().to_string(),
            None => style.clone(),
        };
        let expected_tone = match Tone::parse_known(&tone) {
            Some(known) => known.label().to_string(),
            None => tone.clone(),
        };
        let expected_audience = match Audience::parse_known(&audience) {
            Some(known) => known.label().to_string(),
            None => audience.clone(),
        };
        prop_assert!(prompt.contains(&expected_style));
        prop_assert!(prompt.contains(&expected_tone));
        prop_assert!(prompt.contains(&expected_audience));
    }
}

proptest! {
    #[test]
    fn unknown_labels_reach_prompt_as_typed(
        style in "[a-z]{1,12} [a-z]{1,12}",
        audience in "[A-Z][a-z]{2,10}s & [a-z]{2,10}",
    ) {
        prop_assume!(WritingStyle::parse_known(&style).is_none());
        prop_assume!(Audience::parse_known(&audience).is_none());

        let request = GenerationRequest::new("Tea")
            .with_style(WritingStyle::from_label(&style))
            .with_audience(Audience::from_label(&audience));

        let prompt = compose_prompt(&request).unwrap();

        let style_clause = format!("in a {} style", style);
        let audience_clause = format!("tailored for {} ", audience);
        prop_assert!(prompt.contains(&style_clause));
        prop_assert!(prompt.contains(&audience_clause));
    }
}
