pub const INSERT_CLICKS_QUERY: &str = r#"
                INSERT INTO Clicks (time, page, event)
                SELECT * FROM UNNEST($1::timestamptz[], $2::text[], $3::text[])
                "#;
