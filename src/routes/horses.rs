use crate::domain::{Horse, HorseCatalog};
use actix_web::{web, HttpResponse};

/// A horse record as served to the adoption pages: the raw fields plus the derived facts the
/// templates need, so clients never recompute them.
#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct HorseView<'a> {
    #[serde(flatten)]
    record: &'a Horse,
    age: i32,
    age_display: String,
    is_adoptable: bool,
    is_sanctuary: bool,
}

impl<'a> From<&'a Horse> for HorseView<'a> {
    fn from(record: &'a Horse) -> Self {
        Self {
            record,
            age: record.age(),
            age_display: record.age_display(),
            is_adoptable: record.is_adoptable(),
            is_sanctuary: record.is_sanctuary(),
        }
    }
}

pub async fn list_horses(catalog: web::Data<HorseCatalog>) -> HttpResponse {
    let horses: Vec<HorseView<'_>> = catalog.all().iter().map(HorseView::from).collect();
    HttpResponse::Ok().json(horses)
}
