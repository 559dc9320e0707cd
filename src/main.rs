use httpwire::config::Config;
use httpwire::http::request::Request;
use httpwire::http::response::StatusCode;
use httpwire::http::writer::ResponseWriter;
use httpwire::server;

const HTML_200: &str = r#"<html>
  <head>
    <title>200 OK</title>
  </head>
  <body>
    <h1>Success!</h1>
    <p>Your request was handled without a hitch.</p>
  </body>
</html>"#;

const HTML_400: &str = r#"<html>
  <head>
    <title>400 Bad Request</title>
  </head>
  <body>
    <h1>Bad Request</h1>
    <p>There is something wrong with that request.</p>
  </body>
</html>"#;

const HTML_500: &str = r#"<html>
  <head>
    <title>500 Internal Server Error</title>
  </head>
  <body>
    <h1>Internal Server Error</h1>
    <p>Something broke on our side.</p>
  </body>
</html>"#;

fn demo_handler(w: &mut ResponseWriter, req: &Request) {
    w.headers_mut().set("content-type", "text/html");

    let (status, body) = match req.request_line.target.as_str() {
        "/yourproblem" => (StatusCode::BadRequest, HTML_400),
        "/myproblem" => (StatusCode::InternalServerError, HTML_500),
        _ => (StatusCode::Ok, HTML_200),
    };

    let _ = w.write_status(status);
    let _ = w.write(body.as_bytes());
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cfg = Config::load()?;
    let server = server::serve(&cfg.listen_addr, demo_handler).await?;

    tokio::signal::ctrl_c().await?;
    tracing::info!("Shutdown signal received");
    server.close();

    Ok(())
}
