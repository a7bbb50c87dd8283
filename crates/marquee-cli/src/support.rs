use marquee_catalog::Movie;
use serde_json::{Value, json};

pub fn movie_payload(movie: &Movie) -> Value {
    json!({
        "id": movie.id,
        "title": movie.title,
        "director": movie.director,
        "year": movie.year,
        "genre": movie.genre,
        "description": movie.description,
        "duration": movie.duration,
        "rating": movie.rating
    })
}

pub fn print_movie_line(movie: &Movie) {
    println!(
        "  - {} [{} {}] {} ({:.1})",
        movie.id, movie.genre, movie.year, movie.title, movie.rating
    );
}

pub fn print_json(payload: &Value) {
    println!(
        "{}",
        serde_json::to_string_pretty(payload).expect("json serialization")
    );
}
