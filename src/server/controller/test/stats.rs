use super::*;

/// Tests the servant count.
///
/// Expected: 200 with a bare integer body
#[tokio::test]
async fn reports_total_servants() {
    let (_test, app) = setup(&[5, 4, 3, 2]).await;

    let (status, total) = get_json::<usize>(&app, "/stats/total_servants").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(total, 4);
}
