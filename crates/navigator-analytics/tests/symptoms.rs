use navigator_analytics::symptoms::{SymptomCategory, categorize, count_symptoms};

#[test]
fn counts_whole_words_only() {
    let counts = count_symptoms("Headache and back pain. Pain gets worse; painful when tired.");
    let pairs: Vec<_> = counts.iter().map(|c| (c.keyword.as_str(), c.count)).collect();
    assert_eq!(pairs, vec![("pain", 2), ("headache", 1), ("tired", 1)]);
}

#[test]
fn ties_sort_alphabetically() {
    let counts = count_symptoms("fever, cough");
    let keywords: Vec<_> = counts.iter().map(|c| c.keyword.as_str()).collect();
    assert_eq!(keywords, vec!["cough", "fever"]);
}

#[test]
fn no_keywords_no_counts() {
    assert!(count_symptoms("").is_empty());
    assert!(count_symptoms("feeling off lately").is_empty());
}

#[test]
fn categories_sum_their_keywords() {
    let counts =
        count_symptoms("pain, stiff neck, headache, dizzy spells, fatigue, blurred vision");
    let cats = categorize(&counts);
    let pairs: Vec<_> = cats.iter().map(|c| (c.category, c.count)).collect();
    assert_eq!(
        pairs,
        vec![
            (SymptomCategory::PainRelated, 2),
            (SymptomCategory::Neurological, 2),
            (SymptomCategory::General, 1),
        ]
    );
}

#[test]
fn category_labels_serialize_with_hyphens() {
    let json = serde_json::to_string(&SymptomCategory::PainRelated).unwrap();
    assert_eq!(json, "\"Pain-related\"");
    assert_eq!(SymptomCategory::SkinRelated.label(), "Skin-related");
}

#[test]
fn categories_carry_chart_colours() {
    let cats = categorize(&count_symptoms("itchy rash and a cough"));
    let colours: Vec<_> = cats.iter().map(|c| (c.category, c.color.as_str())).collect();
    assert_eq!(
        colours,
        vec![
            (SymptomCategory::Respiratory, "#1D3557"),
            (SymptomCategory::SkinRelated, "#F1FAEE"),
        ]
    );
}
