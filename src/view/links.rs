//! Streaming link anchors shared by the carousel and the latest-release panel

use crate::dom::Element;
use crate::model::StreamingUrls;

/// Append one anchor per present platform URL, in display order.
///
/// Absent URLs produce nothing at all, not even an empty placeholder.
pub fn append_streaming_links(container: &Element, urls: &StreamingUrls, anchor_class: Option<&str>) {
    for (url, platform) in urls.present() {
        let icon = Element::new("i");
        icon.set_class_name(platform.icon());

        let anchor = Element::new("a")
            .with_attr("href", url)
            .with_attr("target", "_blank")
            .with_attr("aria-label", platform.label())
            .with_child(&icon);
        if let Some(class) = anchor_class {
            anchor.add_class(class);
        }
        container.append_child(&anchor);
    }
}
