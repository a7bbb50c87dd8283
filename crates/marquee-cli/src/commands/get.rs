use crate::support::{movie_payload, print_json};
use marquee_catalog::Catalog;
use serde_json::json;

pub fn run(id: i64, catalog_path: String, json_output: bool) {
    let catalog = Catalog::load_json_or_empty(&catalog_path);

    let Some(movie) = catalog.get(id) else {
        eprintln!("error: movie not found: {id}");
        std::process::exit(1);
    };

    if json_output {
        let payload = json!({
            "action": "get",
            "catalogPath": catalog_path,
            "movie": movie_payload(movie)
        });
        print_json(&payload);
    } else {
        println!(
            "marquee get\n  {} ({}) directed by {}\n  Genre: {}\n  Duration: {} min\n  Rating: {:.1}\n  {}",
            movie.title,
            movie.year,
            movie.director,
            movie.genre,
            movie.duration,
            movie.rating,
            movie.description
        );
    }
}
