use std::io::Cursor;

use image::{DynamicImage, ImageFormat, RgbImage};
use serde_json::{Value, json};

/// Encode a solid-color PNG at a typical thumbnail size.
pub fn thumb_png(color: (u8, u8, u8)) -> Vec<u8> {
    let img = RgbImage::from_pixel(120, 90, image::Rgb([color.0, color.1, color.2]));
    let mut buf = Vec::new();
    DynamicImage::ImageRgb8(img)
        .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
        .expect("Failed to encode test PNG");
    buf
}

/// A rich-grid video item as embedded in the listing page data.
pub fn video_item(id: &str, title: &str, thumb_url: &str) -> Value {
    json!({
        "richItemRenderer": {
            "content": {
                "videoRenderer": {
                    "videoId": id,
                    "title": { "runs": [{ "text": title }] },
                    "thumbnail": { "thumbnails": [{ "url": thumb_url, "width": 336 }] }
                }
            }
        }
    })
}

pub fn continuation_item(token: &str) -> Value {
    json!({
        "continuationItemRenderer": {
            "continuationEndpoint": {
                "continuationCommand": { "token": token }
            }
        }
    })
}

/// A listing page embedding the given grid items plus the API credentials
/// needed for continuation requests.
pub fn listing_page(items: Vec<Value>) -> String {
    let initial = json!({
        "contents": {
            "twoColumnBrowseResultsRenderer": {
                "tabs": [
                    { "tabRenderer": { "title": "Home" } },
                    { "tabRenderer": { "content": { "richGridRenderer": { "contents": items } } } }
                ]
            }
        }
    });

    let mut page = String::from("<!DOCTYPE html><html><head><script>var ytInitialData = ");
    page.push_str(&initial.to_string());
    page.push_str(
        ";</script><script>ytcfg.set({\"INNERTUBE_API_KEY\":\"TESTKEY\",\
         \"INNERTUBE_CONTEXT_CLIENT_VERSION\":\"2.20240101\"});</script>\
         </head><body></body></html>",
    );
    page
}

/// A browse-endpoint response appending the given grid items.
pub fn continuation_page(items: Vec<Value>) -> Value {
    json!({
        "onResponseReceivedActions": [
            { "appendContinuationItemsAction": { "continuationItems": items } }
        ]
    })
}
