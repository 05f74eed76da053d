use fan_engagement::store::SurveyStore;
use fan_engagement::surveys::report::{
    aggregate, render_text, BarChartSpec, SurveyReportView, CHART_HEADROOM,
};
use fan_engagement::surveys::sentiment::{Sentiment, SentimentLexicon};
use std::io::Cursor;

const SURVEY_CSV: &str = "\
Name,Email,Feedback
Alice,a@x.com,This was a great and amazing day
Bob,b@x.com,\"Terrible, worst experience\"
Cara,c@x.com,It was okay I guess
";

#[test]
fn stored_rows_flow_into_a_consistent_report() {
    let rows = SurveyStore::parse_rows(Cursor::new(SURVEY_CSV)).expect("survey rows parse");
    assert_eq!(rows.len(), 3, "header row must be excluded");

    let lexicon = SentimentLexicon::standard();
    let tally = aggregate(&lexicon, &rows);
    assert_eq!(tally.total, 3);
    assert_eq!(tally.positive, 1);
    assert_eq!(tally.negative, 1);
    assert_eq!(tally.neutral, 1);
    assert_eq!(tally.positive + tally.negative + tally.neutral, tally.total);

    let text = render_text(&tally);
    assert!(text.contains("Total Surveys Submitted: 3"));
    assert!(text.contains("Positive Feedback: 1"));
    assert!(text.contains("Negative Feedback: 1"));
    assert!(text.contains("Neutral Feedback: 1"));
}

#[test]
fn malformed_rows_are_tolerated_at_row_granularity() {
    let csv = "\
Name,Email,Feedback
Alice,a@x.com
Bob,b@x.com,wonderful finish
";
    let rows = SurveyStore::parse_rows(Cursor::new(csv)).expect("survey rows parse");
    let tally = aggregate(&SentimentLexicon::standard(), &rows);
    assert_eq!(tally.total, 1);
    assert_eq!(tally.positive, 1);
}

#[test]
fn chart_spec_matches_the_tally_it_came_from() {
    let rows = SurveyStore::parse_rows(Cursor::new(SURVEY_CSV)).expect("survey rows parse");
    let tally = aggregate(&SentimentLexicon::standard(), &rows);

    let spec = BarChartSpec::from_tally(&tally);
    assert_eq!(spec.categories.len(), 4);
    let values: Vec<u64> = spec
        .categories
        .iter()
        .map(|category| category.value)
        .collect();
    assert_eq!(values, vec![3, 1, 1, 1]);
    assert!(spec.y_max >= 3 + CHART_HEADROOM);
}

#[test]
fn json_view_serializes_with_stable_field_names() {
    let rows = SurveyStore::parse_rows(Cursor::new(SURVEY_CSV)).expect("survey rows parse");
    let tally = aggregate(&SentimentLexicon::standard(), &rows);
    let view = SurveyReportView::from_tally(&tally);

    let json = serde_json::to_value(&view).expect("view serializes");
    assert_eq!(json["total_surveys"], 3);
    assert_eq!(json["positive"], 1);
    assert_eq!(json["negative"], 1);
    assert_eq!(json["neutral"], 1);
}

#[test]
fn classifier_precedence_is_stable_end_to_end() {
    let lexicon = SentimentLexicon::standard();
    assert_eq!(
        lexicon.classify("good crowd, awful queues"),
        Sentiment::Positive
    );
}
