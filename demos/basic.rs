use imurl::{Result, Url};

fn main() -> Result<()> {
    // Parse a URL into its components
    let url = Url::parse("https://user@example.com:8080/path;v=2?query=value#hash")?;

    println!("URL: {url}"); // https://user@example.com:8080/path;v=2?query=value#hash
    println!("Scheme: {:?}", url.scheme()); // Some("https")
    println!("Username: {:?}", url.username()); // Some("user")
    println!("Host: {:?}", url.host()); // Some("example.com")
    println!("Port: {:?}", url.port()); // Some(8080)
    println!("Path: {:?}", url.path()); // Some("/path")
    println!("Parameters: {:?}", url.parameters()); // Some("v=2")
    println!("Query: {:?}", url.query()); // Some("query=value")
    println!("Fragment: {:?}", url.fragment()); // Some("hash")
    println!("Netloc: {}", url.netloc()); // user@example.com:8080
    println!();

    // Derive new URLs; the original never changes
    let insecure = url.to_builder().scheme("http").clear_port().build()?;
    println!("Derived: {insecure}"); // http://user@example.com/path;v=2?query=value#hash
    println!("Original: {url}"); // https://user@example.com:8080/path;v=2?query=value#hash
    println!();

    // Raw values are percent-encoded exactly once at the build boundary
    let searched = url.set_query("q", "grep -r");
    println!("Searched: {searched}"); // ...?query=value&q=grep%20-r#hash
    println!("Decoded: {:?}", searched.get_query("q")?.as_str()); // Some("grep -r")

    Ok(())
}
