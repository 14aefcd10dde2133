use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::handlers;
use crate::state::AppState;

pub fn routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .nest("/auth", auth_routes())
        .nest("/hashtags", hashtag_routes())
        .nest("/photos", photo_routes())
}

fn auth_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(handlers::auth::me))
}

fn hashtag_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(
            handlers::hashtag::create_hashtag,
            handlers::hashtag::list_hashtags
        ))
        .routes(routes!(handlers::hashtag::search_hashtags))
}

fn photo_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(
            handlers::photo::upload_photo,
            handlers::photo::list_photos
        ))
        .routes(routes!(
            handlers::photo::get_photo,
            handlers::photo::delete_photo
        ))
        .layer(handlers::photo::upload_body_limit())
}
