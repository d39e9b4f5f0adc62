use super::*;

#[test]
fn static_paths_match_exactly() {
    assert_eq!(Route::from_path("/"), Route::Home);
    assert_eq!(Route::from_path("/login"), Route::Login);
    assert_eq!(Route::from_path("/register"), Route::Register);
    assert_eq!(Route::from_path("/resources"), Route::Resources);
}

#[test]
fn trailing_slash_is_not_normalized() {
    assert_eq!(Route::from_path("/resources/"), Route::NotFound);
    assert_eq!(Route::from_path("/login/"), Route::NotFound);
    assert_eq!(Route::from_path("/resource/1/"), Route::NotFound);
}

#[test]
fn trailing_slash_resources_does_not_load_resources() {
    assert!(!Route::from_path("/resources/").loads_resources());
    assert!(Route::from_path("/resources").loads_resources());
}

#[test]
fn detail_path_parses_numeric_id() {
    assert_eq!(Route::from_path("/resource/7"), Route::ResourceDetail(7));
}

#[test]
fn detail_path_rejects_non_numeric_or_missing_id() {
    assert_eq!(Route::from_path("/resource/abc"), Route::NotFound);
    assert_eq!(Route::from_path("/resource/"), Route::NotFound);
    assert_eq!(Route::from_path("/resource/-1"), Route::NotFound);
}

#[test]
fn href_round_trips_known_routes() {
    for route in [Route::Home, Route::Login, Route::Register, Route::Resources, Route::ResourceDetail(3)] {
        assert_eq!(Route::from_path(&route.href()), route);
    }
}

#[test]
fn not_found_links_home() {
    assert_eq!(Route::NotFound.href(), "/");
}

#[test]
fn only_resources_route_loads_resources() {
    assert!(Route::Resources.loads_resources());
    assert!(!Route::Home.loads_resources());
    assert!(!Route::ResourceDetail(1).loads_resources());
}

#[test]
fn display_uses_href() {
    assert_eq!(Route::ResourceDetail(12).to_string(), "/resource/12");
}
