/// Letter grade to grade-point mapping.
pub const GRADE_POINTS: [(&str, f64); 11] = [
    ("A", 4.0),
    ("A-", 3.7),
    ("B+", 3.3),
    ("B", 3.0),
    ("B-", 2.7),
    ("C+", 2.3),
    ("C", 2.0),
    ("C-", 1.7),
    ("D+", 1.3),
    ("D", 1.0),
    ("F", 0.0),
];

/// Points for a letter grade, or `None` when the grade is not in the table.
pub fn grade_value(grade: &str) -> Option<f64> {
    GRADE_POINTS
        .iter()
        .find(|(letter, _)| *letter == grade)
        .map(|(_, points)| *points)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_grades() {
        assert_eq!(grade_value("A"), Some(4.0));
        assert_eq!(grade_value("B+"), Some(3.3));
        assert_eq!(grade_value("D"), Some(1.0));
        assert_eq!(grade_value("F"), Some(0.0));
    }

    #[test]
    fn test_unknown_grades() {
        assert_eq!(grade_value("X"), None);
        assert_eq!(grade_value("a"), None);
        assert_eq!(grade_value("A+"), None);
        assert_eq!(grade_value(""), None);
    }
}
