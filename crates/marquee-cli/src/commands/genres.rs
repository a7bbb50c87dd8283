use crate::support::print_json;
use marquee_catalog::Catalog;
use serde_json::json;

pub fn run(catalog_path: String, json_output: bool) {
    let catalog = Catalog::load_json_or_empty(&catalog_path);

    if json_output {
        let payload = json!({
            "action": "genres",
            "catalogPath": catalog_path,
            "count": catalog.genres().len(),
            "genres": catalog.genres()
        });
        print_json(&payload);
    } else {
        println!(
            "marquee genres\n  Path: {}\n  Count: {}",
            catalog_path,
            catalog.genres().len()
        );
        for genre in catalog.genres() {
            println!("  - {genre}");
        }
    }
}
