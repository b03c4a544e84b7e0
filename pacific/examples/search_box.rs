//! Renders a search box and a disabled password field.
//!
//! Run with: cargo run -p pacific --example search_box

use pacific::logging;
use pacific::prelude::*;
use simplelog::LevelFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_file_logger("search_box.log", LevelFilter::Trace)?;

    let search_ref = RefObject::new();
    let mut doc = Document::new();

    doc.mount(
        TextInput::new("q", "q", InputType::Search)
            .width(Width::Full)
            .placeholder("Search")
            .node_ref(&search_ref)
            .build(),
    )?;

    let password: TextInputConfig =
        serde_json::from_str(r#"{"id":"pw","name":"pw","type":"password","isDisabled":true}"#)?;
    doc.mount(password.render())?;

    if let Some(search) = search_ref.current() {
        search.set_value("rust");
    }

    println!("{}", doc.render_to_string());
    Ok(())
}
