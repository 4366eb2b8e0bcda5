use github_activity::github::service::{GitHubService, Service};
use github_activity::github::Activity;

// Not really the most interesting tests, but these are testing live HTTPS
// integration and there's not really a consistent way to determine what we
// get back, so merely checking that the types line up and that we got an
// array back will suffice.

#[tokio::test]
#[ignore = "requires access to api.github.com"]
async fn it_retrieves_events() {
    let service = GitHubService::with_base_url("https://api.github.com").unwrap();
    let resp = service.get_events("octocat").await.unwrap();
    assert!(resp.trim_start().starts_with('['));
}

#[tokio::test]
#[ignore = "requires access to api.github.com"]
async fn it_parses_events() {
    let service = GitHubService::with_base_url("https://api.github.com").unwrap();
    let activity = Activity::fetch_with_service("octocat", &service)
        .await
        .unwrap();
    assert_eq!(activity.username(), "octocat");
    assert!(activity.events().is_ok());
}
