use axum::response::Html;

pub async fn form() -> Html<&'static str> {
    Html(
        r#"<h2>Enter the name of the playlist you want to base recommendations on:</h2>
<form action="/recommendations" method="POST">
    <input type="text" name="playlist_name" required>
    <input type="submit" value="Create Recommended Playlist">
</form>"#,
    )
}
