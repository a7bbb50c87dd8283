use crate::support::{movie_payload, print_json, print_movie_line};
use marquee_catalog::Catalog;
use serde_json::json;

pub fn run(catalog_path: String, json_output: bool) {
    let catalog = Catalog::load_json_or_empty(&catalog_path);

    if json_output {
        let items = catalog
            .all()
            .iter()
            .map(movie_payload)
            .collect::<Vec<_>>();
        let payload = json!({
            "action": "list",
            "catalogPath": catalog_path,
            "count": items.len(),
            "genres": catalog.genres(),
            "movies": items
        });
        print_json(&payload);
    } else {
        println!(
            "marquee list\n  Path: {}\n  Count: {}",
            catalog_path,
            catalog.len()
        );
        for movie in catalog.all() {
            print_movie_line(movie);
        }
        println!("  Genres: {}", catalog.genres().join(", "));
    }
}
