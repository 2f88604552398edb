pub const SELECT_PAGES_QUERY: &str = "SELECT DISTINCT page FROM Clicks ORDER BY page";
pub const SELECT_EVENT_COUNTS_IN_RANGE_QUERY: &str = r#"
                SELECT event, COUNT(*) AS count
                FROM Clicks
                WHERE page = $1 AND time >= $2 AND time < $3
                GROUP BY event
                ORDER BY event
                "#;
