//! End-to-end flows through the public library API: events in, actions and
//! frames out, with web results fed back the way the plugin shim does.

use pokemon_manager::api::ApiRequest;
use pokemon_manager::ui::render_frame;
use pokemon_manager::{
    handle_event, initialize, Action, AppState, BusyPolicy, Config, Event, Pokemon, PokemonId,
};

fn send(state: &mut AppState, event: Event) -> ApiRequest {
    let (_, actions) = handle_event(state, &event).unwrap();
    match actions.as_slice() {
        [Action::Send(request)] => {
            // Requests travel through the host inside the context map.
            let context = request.to_context().unwrap();
            ApiRequest::from_context(&context).unwrap()
        }
        other => panic!("{event:?} should send one request, got {other:?}"),
    }
}

fn respond(state: &mut AppState, request: ApiRequest, status: u16, body: &str) {
    let (render, actions) = handle_event(
        state,
        &Event::WebResponse {
            request,
            status,
            body: body.as_bytes().to_vec(),
        },
    )
    .unwrap();
    assert!(render);
    assert!(actions.is_empty());
}

fn type_name(state: &mut AppState, name: &str) {
    for c in name.chars() {
        handle_event(state, &Event::Char(c)).unwrap();
    }
}

#[test]
fn activation_shows_loading_until_the_list_arrives() {
    let mut state = initialize(&Config::default());

    let fetch = send(&mut state, Event::Activate);
    assert!(state.is_busy);
    assert!(state.entities.is_empty());
    assert!(state.draft_name.is_empty());
    assert!(state.last_error.is_none());
    assert!(render_frame(&state, 20, 60).contains("Loading..."));

    respond(&mut state, fetch, 200, r#"[{"id":1,"name":"Pikachu"}]"#);

    assert_eq!(state.entities, vec![Pokemon::new(1, "Pikachu")]);
    let frame = render_frame(&state, 20, 60);
    assert!(frame.contains("Pikachu"));
    assert!(!frame.contains("Loading..."));
}

#[test]
fn add_then_delete_round_trip() {
    let mut state = initialize(&Config::default());
    let fetch = send(&mut state, Event::Activate);
    respond(&mut state, fetch, 200, r#"[{"id":1,"name":"Pikachu"}]"#);

    type_name(&mut state, "Bulbasaur");
    let create = send(&mut state, Event::Submit);
    respond(
        &mut state,
        create,
        201,
        r#"[{"id":1,"name":"Pikachu"},{"id":2,"name":"Bulbasaur"}]"#,
    );
    assert_eq!(state.entities.len(), 2);
    assert_eq!(state.draft_name, "");

    handle_event(&mut state, &Event::FocusList).unwrap();
    let delete = send(&mut state, Event::DeleteSelected);
    assert!(matches!(&delete, ApiRequest::Delete { id: PokemonId::Number(1), .. }));
    respond(&mut state, delete, 204, "");

    assert_eq!(state.entities, vec![Pokemon::new(2, "Bulbasaur")]);
    assert!(!state.is_busy);
}

#[test]
fn failed_create_keeps_the_draft_and_shows_the_error() {
    let mut state = initialize(&Config::default());
    let fetch = send(&mut state, Event::Activate);
    respond(&mut state, fetch, 200, "[]");

    type_name(&mut state, "Charmander");
    let create = send(&mut state, Event::Submit);
    respond(&mut state, create, 500, "oops");

    assert_eq!(state.draft_name, "Charmander");
    assert_eq!(state.last_error.as_deref(), Some("Failed to post Pokemon"));
    let frame = render_frame(&state, 20, 60);
    assert!(frame.contains("Failed to post Pokemon"));
    assert!(frame.contains("Charmander"));
}

#[test]
fn a_new_operation_clears_the_previous_error() {
    let mut state = initialize(&Config::default());
    let fetch = send(&mut state, Event::Activate);
    respond(&mut state, fetch, 503, "");
    assert_eq!(state.last_error.as_deref(), Some("Failed to get Pokemon"));

    handle_event(&mut state, &Event::FocusList).unwrap();
    let refresh = send(&mut state, Event::Refresh);
    assert!(state.last_error.is_none());

    respond(&mut state, refresh, 200, r#"[{"id":"x1","name":"Mew"}]"#);
    assert_eq!(state.entities, vec![Pokemon::new("x1", "Mew")]);
}

#[test]
fn reject_policy_holds_operations_until_idle() {
    let config = Config {
        busy_policy: BusyPolicy::Reject,
        ..Config::default()
    };
    let mut state = initialize(&config);
    let fetch = send(&mut state, Event::Activate);

    type_name(&mut state, "Eevee");
    let (_, actions) = handle_event(&mut state, &Event::Submit).unwrap();
    assert!(actions.is_empty());

    respond(&mut state, fetch, 200, "[]");
    let create = send(&mut state, Event::Submit);
    assert!(matches!(create, ApiRequest::Create { ref name, .. } if name == "Eevee"));
}

#[test]
fn overlapping_operations_settle_on_the_last_response() {
    let mut state = initialize(&Config::default());
    let fetch = send(&mut state, Event::Activate);
    type_name(&mut state, "Mew");
    let create = send(&mut state, Event::Submit);

    respond(&mut state, create, 201, r#"[{"id":1,"name":"Mew"}]"#);
    assert!(!state.is_busy);

    respond(&mut state, fetch, 200, "[]");
    assert!(state.entities.is_empty());
    assert_eq!(state.draft_name, "");
}
