use crate::support::{movie_payload, print_json, print_movie_line};
use marquee_catalog::{Catalog, SearchQuery};
use serde_json::json;

pub fn run(
    name: Option<String>,
    id: Option<i64>,
    genre: Option<String>,
    catalog_path: String,
    json_output: bool,
) {
    let catalog = Catalog::load_json_or_empty(&catalog_path);

    let query = SearchQuery { name, id, genre };
    let no_criteria = query.is_empty();
    let results = catalog.search(&query);

    if json_output {
        let items = results.iter().map(|m| movie_payload(m)).collect::<Vec<_>>();
        let payload = json!({
            "action": "search",
            "catalogPath": catalog_path,
            "searchParameters": {
                "name": query.name,
                "id": query.id,
                "genre": query.genre
            },
            "noCriteria": no_criteria,
            "count": items.len(),
            "movies": items
        });
        print_json(&payload);
    } else {
        println!(
            "marquee search\n  Path: {}\n  Count: {}",
            catalog_path,
            results.len()
        );
        if no_criteria {
            println!("  No criteria supplied; showing every movie.");
        }
        for movie in results {
            print_movie_line(movie);
        }
    }
}
