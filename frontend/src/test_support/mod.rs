#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod fixtures {
    use crate::pages::unified_users::utils::UserRow;

    pub fn row(id: &str, combined_id: &str) -> UserRow {
        UserRow {
            key: id.into(),
            id: id.into(),
            combined_user_id: combined_id.into(),
            first_name: format!("First{}", id),
            last_name: format!("Last{}", id),
            login_name: format!("login{}", id),
            disabled: "N".into(),
            active: "Y".into(),
            ..UserRow::default()
        }
    }

    pub fn rows(count: usize) -> Vec<UserRow> {
        (1..=count)
            .map(|i| row(&i.to_string(), &(i + 10).to_string()))
            .collect()
    }
}
