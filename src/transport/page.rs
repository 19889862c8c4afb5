use serde::Deserialize;
use serde::de::DeserializeOwned;

use super::DecodeError;
use crate::domain::Page;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(bound(deserialize = "W: DeserializeOwned"))]
struct PageJson<W> {
    page: u32,
    limit: u32,
    page_count: u32,
    #[serde(default)]
    resources: Vec<W>,
}

/// Decode a paged envelope, converting each wire record in server order.
pub fn decode_page<W, T>(
    json: &str,
    convert: impl Fn(W) -> Result<T, DecodeError>,
) -> Result<Page<T>, DecodeError>
where
    W: DeserializeOwned,
{
    let parsed: PageJson<W> = serde_json::from_str(json)?;
    let resources = parsed
        .resources
        .into_iter()
        .map(convert)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Page {
        page: parsed.page,
        limit: parsed.limit,
        page_count: parsed.page_count,
        resources,
    })
}
