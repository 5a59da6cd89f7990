//! Console walkthrough of the viewer bound to a logging map provider.
//!
//! Run with `cargo run --example nyc_poi`. The annotations are fetched from
//! the live Wikipedia endpoint; without network access every marker falls
//! back to the fixed placeholder text.

use std::time::Duration;

use ortelius::{
    GeoPoint, LatLngBounds, MapProvider, MarkerId, PopupContent, ViewerBuilder, ViewerEvent,
};

struct ConsoleMap;

impl MapProvider for ConsoleMap {
    fn init_surface(&mut self, center: GeoPoint, zoom: u32) {
        println!(
            "[map] surface at ({:.4}, {:.4}), zoom {zoom}",
            center.lat(),
            center.lng()
        );
    }

    fn place_marker(&mut self, _id: MarkerId, location: GeoPoint, title: &str) {
        println!(
            "[map] marker {title:?} at ({:.4}, {:.4})",
            location.lat(),
            location.lng()
        );
    }

    fn set_marker_visible(&mut self, id: MarkerId, visible: bool) {
        println!(
            "[map] marker #{} {}",
            id.index(),
            if visible { "shown" } else { "hidden" }
        );
    }

    fn set_marker_animation(&mut self, id: MarkerId, animated: bool) {
        println!(
            "[map] marker #{} animation {}",
            id.index(),
            if animated { "on" } else { "off" }
        );
    }

    fn fit_viewport(&mut self, bounds: LatLngBounds) {
        println!(
            "[map] viewport ({:.4}, {:.4}) - ({:.4}, {:.4})",
            bounds.south, bounds.west, bounds.north, bounds.east
        );
    }

    fn open_popup(&mut self, _id: MarkerId, content: &PopupContent) {
        println!("[map] popup: {} - {}", content.title, content.body);
    }

    fn set_popup_content(&mut self, _id: MarkerId, content: &PopupContent) {
        println!("[map] popup refreshed: {} - {}", content.title, content.body);
    }

    fn close_popup(&mut self) {
        println!("[map] popup closed");
    }

    fn is_ready(&self) -> bool {
        true
    }
}

#[tokio::main]
async fn main() {
    env_logger::init();

    let mut viewer = ViewerBuilder::default().build(ConsoleMap);

    // Give the annotation fetches a moment to land.
    for _ in 0..50 {
        viewer.tick();
        let all_done = viewer
            .store()
            .iter()
            .all(|(_, marker)| marker.annotation().is_some());
        if all_done {
            break;
        }

        std::thread::sleep(Duration::from_millis(100));
    }

    println!("\nPlaces ({}):", load_state_label(&viewer));
    print_list(&viewer);

    println!("\nSearching for \"sta\":");
    viewer.handle_event(ViewerEvent::SearchChanged("sta".into()));
    print_list(&viewer);

    let starbucks = viewer
        .visible_markers()
        .first()
        .map(|(id, _)| *id)
        .expect("the search matched at least one marker");
    println!("\nSelecting the first match:");
    viewer.handle_event(ViewerEvent::MarkerActivated(starbucks));
    viewer.handle_event(ViewerEvent::PopupClosed);

    println!("\nClearing the search:");
    viewer.handle_event(ViewerEvent::SearchChanged(String::new()));
    print_list(&viewer);
}

fn print_list(viewer: &ortelius::Viewer<ConsoleMap>) {
    for (id, marker) in viewer.visible_markers() {
        println!(
            "  #{} {} - {}",
            id.index(),
            marker.title(),
            marker.annotation().unwrap_or("(fetching...)")
        );
    }
}

fn load_state_label(viewer: &ortelius::Viewer<ConsoleMap>) -> &'static str {
    match viewer.load_state() {
        ortelius::MapLoadState::Loading => "map still loading",
        ortelius::MapLoadState::Ready => "map ready",
        ortelius::MapLoadState::Failed => "map failed to load",
    }
}
