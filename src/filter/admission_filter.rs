use serde::{Deserialize, Serialize};

use crate::types::ALL;

/// Bound value for one generated condition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterParam {
    Text(String),
    Integer(i64),
}

/// Optional narrowing of the joined admissions view.
///
/// Every present query-string value that is neither empty nor `"All"` adds
/// one exact-match condition; conditions are combined with AND. The skipped
/// `term_code` and `term_year` fields always constrain. Column references use the
/// aliases of the admissions view query: `a` record, `t` term, `p` program,
/// `d` department.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdmissionFilter {
    /// Term code, e.g. `Fall24`
    pub term: Option<String>,
    /// Department code
    pub department: Option<String>,
    /// Program type, e.g. `Bachelor's`
    pub program: Option<String>,
    pub academic_career: Option<String>,
    pub admit_type: Option<String>,
    /// Exact term code, set by term lookups; `"All"` is not a wildcard here
    #[serde(skip)]
    pub term_code: Option<String>,
    /// Calendar year of the term, set by academic-year lookups
    #[serde(skip)]
    pub term_year: Option<i64>,
}

impl AdmissionFilter {
    pub fn by_term(term_code: impl Into<String>) -> Self {
        Self {
            term_code: Some(term_code.into()),
            ..Default::default()
        }
    }

    pub fn by_term_year(year: i64) -> Self {
        Self {
            term_year: Some(year),
            ..Default::default()
        }
    }

    /// Generate the WHERE body and its positional parameters
    pub fn where_clause(&self) -> (String, Vec<FilterParam>) {
        let mut conditions = vec![];
        let mut params = vec![];

        let text_fields = [
            ("t.term_code", &self.term),
            ("d.department_code", &self.department),
            ("p.program_type", &self.program),
            ("a.academic_career", &self.academic_career),
            ("a.admit_type", &self.admit_type),
        ];
        for (column, value) in text_fields {
            if let Some(value) = value.as_deref().filter(|v| constrains(v)) {
                conditions.push(format!("{} = ?", column));
                params.push(FilterParam::Text(value.to_string()));
            }
        }

        if let Some(code) = &self.term_code {
            conditions.push("t.term_code = ?".to_string());
            params.push(FilterParam::Text(code.clone()));
        }
        if let Some(year) = self.term_year {
            conditions.push("t.term_year = ?".to_string());
            params.push(FilterParam::Integer(year));
        }

        let clause = if conditions.is_empty() {
            "1=1".to_string()
        } else {
            conditions.join(" AND ")
        };
        (clause, params)
    }
}

fn constrains(value: &str) -> bool {
    !value.is_empty() && value != ALL
}
