use actix_web::{get, Responder};

#[get("/healthz")]
pub async fn health() -> impl Responder {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn reports_ok() {
        let app = test::init_service(App::new().service(health)).await;
        let req = test::TestRequest::get().uri("/healthz").to_request();
        let body = test::call_and_read_body(&app, req).await;

        assert_eq!(body, "OK");
    }
}
