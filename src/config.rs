//! Extraction configuration.
//!
//! Concept-branch identifiers and section markers are the vocabulary shared
//! with the hosting pipeline. The defaults match the ontology the pipeline
//! ships with; callers override individual fields when their store uses other
//! branch names.

/// Names and markers used by the grade and size stages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractorConfig {
    /// Generic grading-system branch. Every prior annotation in it is
    /// removed before grades are searched.
    pub grading_system_branch: String,
    /// Plain grade findings; suppressed when inside a new grade annotation.
    pub grade_finding_branch: String,
    /// Size concepts; suppressed when inside a new size annotation.
    pub size_branch: String,
    /// Concept id stamped on every size annotation.
    pub size_concept_id: String,
    /// Phrase that starts a grouped grading scheme. Text from here on is not
    /// searched for simple grades. Case-sensitive.
    pub grade_group_phrase: String,
    /// Section marker. Grades starting after its last occurrence are ignored.
    /// Case-sensitive.
    pub comments_marker: String,
    /// Characters of context on each side of a mention in the mention table.
    pub mention_window_edge: usize,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            grading_system_branch: "GradingSystem".to_string(),
            grade_finding_branch: "CTCAE_Grade_Finding".to_string(),
            size_branch: "Size".to_string(),
            size_concept_id: "SizeMeasurement".to_string(),
            grade_group_phrase: "Prognostic Nuclear Grade Group".to_string(),
            comments_marker: "COMMENTS".to_string(),
            mention_window_edge: 40,
        }
    }
}
