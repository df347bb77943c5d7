//! URL construction for the collection endpoint.

use url::Url;

/// Collection URL: `{base}/{resource}`.
pub fn collection_url(base: &Url, resource: &str) -> Url {
    let mut url = base.clone();
    let base_path = url.path().trim_end_matches('/');
    let resource = resource.trim_matches('/');
    url.set_path(&format!("{base_path}/{resource}"));
    url
}

/// Item URL: `{base}/{resource}/{id}`, with `id` encoded as one segment.
pub fn item_url(base: &Url, resource: &str, id: &str) -> Url {
    let mut url = collection_url(base, resource);
    let collection = url.path().to_string();
    url.set_path(&format!("{collection}/{}", urlencoding::encode(id)));
    url
}
