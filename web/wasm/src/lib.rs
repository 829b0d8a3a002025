use hilo::session::{parse_token_response, token_request_body};
use hilo::view::TITLE;
use hilo::{
    Game, GameOptions, Guess, HandshakeStep, Profile, Session, SessionConfig, SessionError, View,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// The activity screen: one game plus the host session shown in the header.
///
/// The host SDK lives on the JavaScript side. JS drives the handshake and
/// reports each step here; the Rust side owns validation, the token wire
/// format, and which updates are still allowed to land.
#[wasm_bindgen]
pub struct WasmActivity {
    game: Game,
    session: Session,
    title: String,
}

#[wasm_bindgen]
impl WasmActivity {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Self {
        Self {
            game: Game::new(GameOptions::default(), seed as u64),
            session: Session::new(),
            title: TITLE.to_owned(),
        }
    }

    pub fn set_title(&mut self, title: String) {
        self.title = title;
    }

    pub fn start(&self) {
        self.game.start();
    }

    /// Returns whether the guess was applied.
    pub fn guess(&self, direction: &str) -> Result<bool, JsValue> {
        let guess = parse_guess(direction)?;
        Ok(self.game.guess(guess).is_some())
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let view = View::render(&self.game.state(), &self.session.connection(), &self.title);
        to_js_value(&view)
    }

    /// Validates the configuration and returns the client id to authorize
    /// with, or `undefined` once the screen was torn down. A configuration
    /// failure is recorded as the session's error status.
    pub fn begin_handshake(
        &self,
        client_id: Option<String>,
        token_endpoint: String,
    ) -> Result<Option<String>, JsValue> {
        let mut config = SessionConfig::default().with_token_endpoint(token_endpoint);
        config.client_id = client_id;

        self.session
            .start_handshake(&config)
            .map(|client_id| client_id.map(str::to_owned))
            .map_err(js_err)
    }

    pub fn standalone(&self) {
        self.session.mark_standalone();
    }

    pub fn token_request(&self, code: &str) -> Result<String, JsValue> {
        token_request_body(code).map_err(|err| self.fail(err))
    }

    pub fn access_token(&self, response: &str) -> Result<String, JsValue> {
        parse_token_response(response).map_err(|err| self.fail(err))
    }

    /// Settles the handshake with the profile returned by authenticate. A
    /// profile that cannot be decoded ends the handshake with an error.
    pub fn connected(&self, profile: JsValue) -> Result<bool, JsValue> {
        let result = serde_wasm_bindgen::from_value::<Profile>(profile)
            .map_err(|err| SessionError::Authenticate(err.to_string()));
        let error = result.as_ref().err().map(js_err);
        let applied = self.session.finish(result);
        error.map_or(Ok(applied), Err)
    }

    /// Records a failed handshake step (`ready`, `authorize`, `exchange`, or
    /// `authenticate`).
    pub fn failed(&self, step: &str, message: String) -> Result<bool, JsValue> {
        let step: HandshakeStep = step.parse().map_err(js_err)?;
        Ok(self.session.mark_failed(&step.error(message)))
    }

    /// Called when the screen unmounts; later handshake results are dropped.
    pub fn teardown(&self) {
        self.session.teardown();
    }

    pub fn is_torn_down(&self) -> bool {
        self.session.is_torn_down()
    }
}

impl WasmActivity {
    fn fail(&self, err: SessionError) -> JsValue {
        self.session.mark_failed(&err);
        js_err(err)
    }
}

fn parse_guess(direction: &str) -> Result<Guess, JsValue> {
    match direction {
        "higher" => Ok(Guess::Higher),
        "lower" => Ok(Guess::Lower),
        other => Err(JsValue::from_str(&format!("unknown guess direction: {other}"))),
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
