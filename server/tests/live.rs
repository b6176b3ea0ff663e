//! Drive the real server over HTTP.
//!
//! # Design
//! Binds the server to a random port on a background thread, then walks
//! through the pages with ureq the way a browser would: forms are posted and
//! the 303 back to `/` is followed, so every step asserts on the rendered list.

use todo_server::config::ServerConfig;

/// Start the server on a random port and return its base URL.
fn start_server() -> String {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            todo_server::run(listener, &ServerConfig::default()).await
        })
        .unwrap();
    });

    format!("http://{addr}")
}

/// 4xx/5xx come back as data rather than `Err`.
fn agent() -> ureq::Agent {
    ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent()
}

fn page(mut response: ureq::http::Response<ureq::Body>) -> (u16, String) {
    let status = response.status().as_u16();
    let body = response.body_mut().read_to_string().unwrap_or_default();
    (status, body)
}

fn get(agent: &ureq::Agent, url: &str) -> (u16, String) {
    page(agent.get(url).call().expect("HTTP transport error"))
}

fn post_task(agent: &ureq::Agent, url: &str, task: &str) -> (u16, String) {
    page(
        agent
            .post(url)
            .send_form([("task", task)])
            .expect("HTTP transport error"),
    )
}

#[test]
fn browse_add_edit_complete_delete() {
    let base = start_server();
    let agent = agent();

    // Step 1: seed data is listed.
    let (status, html) = get(&agent, &format!("{base}/"));
    assert_eq!(status, 200);
    assert!(html.contains("Learn Flask"));
    assert!(html.contains("Build a todo app"));
    assert!(html.contains("Style with CSS"));

    // Step 2: add a todo; the redirect lands back on the list.
    let (status, html) = post_task(&agent, &format!("{base}/add"), "Water plants");
    assert_eq!(status, 200);
    assert!(html.contains("Water plants"));
    assert!(html.contains(r#"id="todo-4""#));

    // Step 3: empty add changes nothing.
    let (status, html) = post_task(&agent, &format!("{base}/add"), "");
    assert_eq!(status, 200);
    assert!(!html.contains(r#"id="todo-5""#));

    // Step 4: toggle the new todo.
    let (status, html) = get(&agent, &format!("{base}/complete/4"));
    assert_eq!(status, 200);
    assert!(html.contains(r#"class="todo completed" id="todo-4""#));

    // Step 5: the edit form shows the current text, and saving renames it.
    let (status, html) = get(&agent, &format!("{base}/edit/1"));
    assert_eq!(status, 200);
    assert!(html.contains(r#"value="Learn Flask""#));
    let (status, html) = post_task(&agent, &format!("{base}/edit/1"), "Learn Rust");
    assert_eq!(status, 200);
    assert!(html.contains("Learn Rust"));
    assert!(!html.contains("Learn Flask"));

    // Step 6: delete the new todo.
    let (status, html) = get(&agent, &format!("{base}/delete/4"));
    assert_eq!(status, 200);
    assert!(!html.contains("Water plants"));

    // Step 7: editing a deleted todo falls back to the list.
    let (status, html) = get(&agent, &format!("{base}/edit/4"));
    assert_eq!(status, 200);
    assert!(html.contains("Learn Rust"));
    assert!(!html.contains(r#"action="/edit/4""#));

    // Step 8: anything but plain digits is not a route.
    let (status, _) = get(&agent, &format!("{base}/delete/four"));
    assert_eq!(status, 404);
    let (status, _) = get(&agent, &format!("{base}/complete/+1"));
    assert_eq!(status, 404);
    let (_, html) = get(&agent, &format!("{base}/"));
    assert!(html.contains(r#"class="todo" id="todo-1""#));
}
