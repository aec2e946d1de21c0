/// `ParamMap` usage example
use imurl::{ParamMap, ParamValue, Url};

fn main() {
    // Parse a query string; order is preserved, repeated keys accumulate
    let mut params = ParamMap::parse("name=John&age=30&q=a&q=b&verbose", "&");

    // Get values
    println!("name: {:?}", params.get("name")); // Some("John")
    println!("q: {:?}", params.get_all("q")); // [Some("a"), Some("b")]
    println!("verbose: {:?}", params.get_value("verbose")); // Some(Flag)
    println!();

    // Append another occurrence (promotes the entry to a list)
    params.append("q", Some("c".to_string()));
    println!("After append: {}", params.serialize("&")); // name=John&age=30&q=a&q=b&q=c&verbose
    println!();

    // Set replaces in place, keeping the key's position
    params.set("age", "31");
    println!("After set: {}", params.serialize("&")); // name=John&age=31&q=a&q=b&q=c&verbose
    println!();

    // Delete a key
    params.delete("name");
    println!("After delete: {}", params.serialize("&")); // age=31&q=a&q=b&q=c&verbose
    println!();

    // Iterate over entries
    for (key, value) in params.iter() {
        if value.is_flag() {
            println!("  {key} (bare key)");
        } else {
            println!("  {key} = {value:?}");
        }
    }
    println!();

    // Attach a map to a URL; raw text is encoded on the way in
    let query: ParamMap = [
        ("project", ParamValue::from("im url")),
        ("draft", ParamValue::Flag),
    ]
    .into_iter()
    .collect();
    if let Ok(url) = Url::builder().host("example.com").query(query).build() {
        println!("URL: {url}"); // //example.com?project=im%20url&draft
    }
}
