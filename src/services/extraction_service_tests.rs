// src/services/extraction_service_tests.rs
//
// EXTRACTION UNIT TESTS
//
// PURPOSE:
// - Prove the five candidate patterns match independent of attribute order
// - Prove candidate ordering: size_hint descending, stable on ties
// - Prove href resolution against the page base URL
// - Prove extraction never fails, even on garbage markup

#[cfg(test)]
mod extraction_tests {
    use crate::domain::{IconKind, SiteInfo};
    use crate::services::ExtractionService;

    const PAGE: &str = "https://ex.com/sub/page.html";

    fn extract(html: &str) -> SiteInfo {
        ExtractionService::new().extract(html, PAGE)
    }

    #[test]
    fn test_sized_icons_sorted_descending_stable_on_ties() {
        let html = r#"
            <link rel="icon" sizes="32x32" href="/a32.png">
            <link rel="icon" sizes="96x96" href="/a96.png">
            <link rel="icon" sizes="64x64" href="/first64.png">
            <link rel="icon" sizes="64x64" href="/second64.png">
        "#;

        let info = extract(html);
        let urls: Vec<&str> = info.candidates.iter().map(|c| c.url.as_str()).collect();

        assert_eq!(
            urls,
            vec![
                "https://ex.com/a96.png",
                "https://ex.com/first64.png",
                "https://ex.com/second64.png",
                "https://ex.com/a32.png",
            ]
        );
    }

    #[test]
    fn test_attribute_order_does_not_matter() {
        let href_first = extract(r#"<link rel="icon" href="/a.png" sizes="48x48">"#);
        let sizes_first = extract(r#"<link sizes="48x48" href="/a.png" rel="icon">"#);

        assert_eq!(href_first.candidates, sizes_first.candidates);
        assert_eq!(href_first.candidates.len(), 1);
        assert_eq!(href_first.candidates[0].size_hint, 48);
        assert_eq!(href_first.candidates[0].kind, IconKind::SizedIcon);
    }

    #[test]
    fn test_apple_touch_icon_defaults_to_180() {
        let info = extract(r#"<link rel="apple-touch-icon" href="/icon.png">"#);

        assert_eq!(info.candidates.len(), 1);
        let candidate = &info.candidates[0];
        assert_eq!(candidate.url, "https://ex.com/icon.png");
        assert_eq!(candidate.size_hint, 180);
        assert_eq!(candidate.kind, IconKind::AppleTouchIcon);
    }

    #[test]
    fn test_apple_touch_icon_precomposed_and_declared_size() {
        let info = extract(
            r#"<link rel="apple-touch-icon-precomposed" sizes="152x152" href="/pre.png">"#,
        );

        assert_eq!(info.candidates.len(), 1);
        assert_eq!(info.candidates[0].size_hint, 152);
        assert_eq!(info.candidates[0].kind, IconKind::AppleTouchIcon);
    }

    #[test]
    fn test_sized_icon_below_32_is_dropped() {
        let info = extract(r#"<link rel="icon" sizes="16x16" href="/tiny.png">"#);
        assert!(info.candidates.is_empty());
    }

    #[test]
    fn test_generic_icon_size_inferred_from_url() {
        let info = extract(
            r#"
            <link rel="shortcut icon" href="/favicon-96x96.png">
            <link rel="icon" href="/icon-192.png">
            <link rel="icon" href="/plain.ico">
        "#,
        );

        let by_url = |url: &str| {
            info.candidates
                .iter()
                .find(|c| c.url.ends_with(url))
                .unwrap_or_else(|| panic!("missing candidate {}", url))
        };

        assert_eq!(by_url("favicon-96x96.png").size_hint, 96);
        assert_eq!(by_url("icon-192.png").size_hint, 192);
        assert_eq!(by_url("plain.ico").size_hint, 32);
        assert!(info
            .candidates
            .iter()
            .all(|c| c.kind == IconKind::GenericIcon));
    }

    #[test]
    fn test_single_manifest_candidate_with_zero_size() {
        let info = extract(
            r#"
            <link rel="manifest" href="/site.webmanifest">
            <link rel="manifest" href="/other.webmanifest">
        "#,
        );

        assert_eq!(info.candidates.len(), 1);
        let candidate = &info.candidates[0];
        assert_eq!(candidate.url, "https://ex.com/site.webmanifest");
        assert_eq!(candidate.size_hint, 0);
        assert_eq!(candidate.kind, IconKind::Manifest);
    }

    #[test]
    fn test_og_image_always_carries_synthetic_200() {
        let info = extract(
            r#"<meta property="og:image" content="https://cdn.ex.com/preview-1200x630.jpg">"#,
        );

        assert_eq!(info.candidates.len(), 1);
        assert_eq!(info.candidates[0].size_hint, 200);
        assert_eq!(info.candidates[0].kind, IconKind::OgImage);
    }

    #[test]
    fn test_og_image_via_name_attribute_and_first_wins() {
        let info = extract(
            r#"
            <meta name="og:image" content="/first.jpg">
            <meta property="og:image" content="/second.jpg">
        "#,
        );

        assert_eq!(info.candidates.len(), 1);
        assert_eq!(info.candidates[0].url, "https://ex.com/first.jpg");
    }

    #[test]
    fn test_og_image_outranks_declared_apple_touch_icon() {
        let info = extract(
            r#"
            <link rel="apple-touch-icon" sizes="180x180" href="/touch.png">
            <meta property="og:image" content="/preview.jpg">
        "#,
        );

        assert_eq!(info.candidates[0].kind, IconKind::OgImage);
        assert_eq!(info.candidates[1].kind, IconKind::AppleTouchIcon);
    }

    #[test]
    fn test_href_resolution_rules() {
        let info = extract(
            r#"
            <link rel="icon" sizes="32x32" href="icons/a.png">
            <link rel="icon" sizes="48x48" href="/a.png">
            <link rel="icon" sizes="64x64" href="//cdn.ex.com/a.png">
            <link rel="icon" sizes="96x96" href="https://abs.ex.com/a.png">
        "#,
        );

        let urls: Vec<&str> = info.candidates.iter().map(|c| c.url.as_str()).collect();
        assert_eq!(
            urls,
            vec![
                "https://abs.ex.com/a.png",
                "https://cdn.ex.com/a.png",
                "https://ex.com/a.png",
                "https://ex.com/sub/icons/a.png",
            ]
        );
    }

    #[test]
    fn test_duplicate_urls_first_occurrence_wins() {
        let info = extract(
            r#"
            <link rel="apple-touch-icon" href="/icon.png">
            <link rel="icon" sizes="64x64" href="/icon.png">
        "#,
        );

        assert_eq!(info.candidates.len(), 1);
        assert_eq!(info.candidates[0].kind, IconKind::AppleTouchIcon);
        assert_eq!(info.candidates[0].size_hint, 180);
    }

    #[test]
    fn test_title_extracted_and_trimmed() {
        let info = extract("<title> NavGo \u{2014} start page </title>");
        assert_eq!(info.title.as_deref(), Some("NavGo \u{2014} start page"));
    }

    #[test]
    fn test_garbage_markup_yields_empty_site_info() {
        let info = extract("<<<>>> not << html &&& <link rel=>");
        assert_eq!(info.title, None);
        assert!(info.candidates.is_empty());
    }

    #[test]
    fn test_unrelated_links_are_ignored() {
        let info = extract(
            r##"
            <link rel="stylesheet" href="/style.css">
            <link rel="preconnect" href="https://fonts.ex.com">
            <link rel="mask-icon" href="/mask.svg" color="#000000">
        "##,
        );

        assert!(info.candidates.is_empty());
    }

    #[test]
    fn test_one_bad_tag_does_not_stop_the_scan() {
        let info = extract(
            r#"
            <link rel="icon" sizes href>
            <link rel="apple-touch-icon" href="/good.png">
        "#,
        );

        assert_eq!(info.candidates.len(), 1);
        assert_eq!(info.candidates[0].url, "https://ex.com/good.png");
    }

    #[test]
    fn test_uppercase_tags_and_attributes() {
        let info = extract(r#"<LINK REL="ICON" SIZES="64x64" HREF="/caps.png">"#);

        assert_eq!(info.candidates.len(), 1);
        assert_eq!(info.candidates[0].size_hint, 64);
    }
}
