//! Format a template and print the SQL and its bind parameters.
//!
//! Run with:
//! cargo run --example template_query -p pgtemplate

use pgtemplate::{Fragment, Params, Template, TemplateResult, args};

fn main() -> TemplateResult<()> {
    let t = Template::new(
        "SELECT {cols} FROM {@Q} WHERE {key@I} = {key@P} AND status = {status@L} LIMIT {@S}",
    );
    println!("placeholders: positional={} named={:?}", t.positional_count(), t.names());

    let cols = ["id", "username", "created_at"]
        .into_iter()
        .map(Fragment::identifier)
        .collect::<pgtemplate::Composed>()
        .join(Fragment::sql(", "));

    let q = t.format(&args![
        "public.users",
        "10";
        "cols" => cols,
        "key" => "email",
        "status" => "active",
    ])?;
    println!("sql: {q}");

    let prepared = q.prepare(&Params::new().bind_named("email", "alice@example.com"))?;
    println!("prepared: {}", prepared.sql);
    println!("params: {:?}", prepared.params);

    // Missing arguments are reported, not guessed.
    if let Err(e) = t.format(&args!["public.users"]) {
        println!("error: {e}");
    }

    Ok(())
}
