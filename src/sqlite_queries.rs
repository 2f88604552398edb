pub const INSERT_CLICK_QUERY: &str = "INSERT INTO Clicks (time, page, event) VALUES ($1, $2, $3)";
