use serde::{Deserialize, Serialize};

/// `GET student/dashboard/stats`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentStats {
    #[serde(default)]
    pub enrolled_courses: u32,
    #[serde(default)]
    pub completed_exams: u32,
    #[serde(default)]
    pub upcoming_exams: u32,
    #[serde(default)]
    pub attendance: Option<String>,
    #[serde(default)]
    pub performance_score: Option<String>,
}

/// `GET teacher/dashboard/stats`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherStats {
    #[serde(default)]
    pub total_classes: u32,
    #[serde(default)]
    pub total_students: u32,
    #[serde(default)]
    pub submitted_assignments: u32,
}

/// `GET admin/dashboard/stats`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    #[serde(default)]
    pub total_students: u32,
    #[serde(default)]
    pub total_teachers: u32,
    #[serde(default)]
    pub approved_teachers: u32,
    #[serde(default)]
    pub total_revenue: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_default_missing_counters_to_zero() {
        let stats: StudentStats =
            serde_json::from_str(r#"{ "enrolledCourses": 6 }"#).unwrap();
        assert_eq!(stats.enrolled_courses, 6);
        assert_eq!(stats.completed_exams, 0);

        let stats: AdminStats =
            serde_json::from_str(r#"{ "totalRevenue": 1250000.5 }"#).unwrap();
        assert_eq!(stats.total_revenue, 1250000.5);
        assert_eq!(stats.total_students, 0);
    }
}
