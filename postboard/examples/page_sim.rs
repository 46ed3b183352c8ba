// Example: drive the posts page without a browser or network.
//
// A stub transport stands in for the HTTP endpoint; scrolling is simulated
// by feeding offsets to the page the way a host scroll container would.
use postboard::{Post, PostTransport, PostsClient, PostsPage, required, submit_action};

use async_trait::async_trait;

struct StubTransport;

#[async_trait]
impl PostTransport for StubTransport {
    async fn fetch_posts(&self) -> anyhow::Result<Vec<Post>> {
        Ok((1..=25)
            .map(|id| Post {
                id,
                title: format!("Post #{id}"),
                body: format!("Body of post #{id}. ").repeat(8),
                user_id: 1 + id % 3,
            })
            .collect())
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "postboard=debug,rowwindow=debug".into()),
        )
        .init();

    let client = PostsClient::with_transport(StubTransport);
    let mut page = PostsPage::load(&client).await?;
    page.on_viewport(160);

    let labels: Vec<&str> = page.headers().iter().map(|h| h.label).collect();
    println!("columns: {}", labels.join(" | "));
    println!("rows: {}, track: {}px", page.row_count(), page.total_size());

    for offset in [0u64, 120, 480, 10_000] {
        page.on_scroll(offset);
        println!(
            "-- scroll {:>5} (clamped {:>3}) --",
            offset,
            page.window().scroll_offset()
        );
        page.for_each_visible_row(|item, row| {
            println!("  row {} @ {:>3}px: {}", item.index, item.start, row.cells[1].value);
        });
    }

    // The form side: one invalid submit, one dispatched submit.
    let form = page.form_mut();
    *form = postboard::PostForm::with_action(submit_action(|draft| async move {
        println!("created (simulated): {:?}", draft.title);
        Ok(())
    }))
    .with_body_validator(required("body"));

    form.submit();
    println!("errors after empty submit: {:?}", form.errors().body);

    form.set_title("Hello");
    form.set_body("World");
    form.submit();
    // Give the detached submit task a chance to run before we exit.
    tokio::time::sleep(std::time::Duration::from_millis(50)).await;

    Ok(())
}
