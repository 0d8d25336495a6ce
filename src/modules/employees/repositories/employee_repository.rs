use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::core::Result;
use crate::modules::employees::models::{EmployeeRecord, EmployeeType};

/// Employee demographic lookup
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    async fn find_by_id(
        &self,
        emp_id: i64,
        emp_type: EmployeeType,
    ) -> Result<Option<EmployeeRecord>>;
}

pub struct MySqlEmployeeRepository {
    pool: MySqlPool,
}

impl MySqlEmployeeRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

// Teaching staff get designation and department through the role and
// department assignment tables; non-teaching staff carry them inline.
const TEACHING_QUERY: &str = r#"
    SELECT
        CONCAT(e.first_name, ' ', COALESCE(e.last_name, '')) AS name,
        r.role AS designation,
        d.department AS department,
        e.pan_no,
        e.mobile_1 AS mobile,
        e.dob,
        e.place
    FROM employee_master e
    LEFT JOIN emp_role_master er ON er.emp_id = e.id
    LEFT JOIN role_master r ON r.id = er.role_id
    LEFT JOIN emp_dept_master ed ON ed.emp_id = e.id
    LEFT JOIN department_master d ON d.id = ed.dept_id
    WHERE e.id = ?
    LIMIT 1
"#;

const NON_TEACHING_QUERY: &str = r#"
    SELECT
        CONCAT(e.first_name, ' ', COALESCE(e.last_name, '')) AS name,
        e.designation,
        e.dept AS department,
        e.pan_no,
        e.mobile_1 AS mobile,
        e.dob,
        e.place
    FROM employee_master_non_teaching e
    WHERE e.id = ?
    LIMIT 1
"#;

#[async_trait]
impl EmployeeRepository for MySqlEmployeeRepository {
    async fn find_by_id(
        &self,
        emp_id: i64,
        emp_type: EmployeeType,
    ) -> Result<Option<EmployeeRecord>> {
        let sql = match emp_type {
            EmployeeType::Teaching => TEACHING_QUERY,
            EmployeeType::NonTeaching => NON_TEACHING_QUERY,
        };

        let record = sqlx::query_as::<_, EmployeeRecord>(sql)
            .bind(emp_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(record)
    }
}
