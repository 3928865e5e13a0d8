use bjtable::{
    Card, Instruction, Intent, Response, RoundOutcome, RoundResult, RoundState, StatsSummary,
    Suit, Table, TableOptions, TableView,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmTable {
    table: Table,
}

#[wasm_bindgen]
impl WasmTable {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32, name: String, capital: u32) -> Self {
        Self {
            table: Table::new(options(name, capital), seed as u64),
        }
    }

    pub fn reset(&mut self, seed: u32, name: String, capital: u32) {
        self.table = Table::new(options(name, capital), seed as u64);
    }

    /// Accepts the bet exactly as typed; parsing happens in the table.
    pub fn place_bet(&mut self, amount: String) -> Result<JsValue, JsValue> {
        self.dispatch(Intent::PlaceBet(amount.into()))
    }

    pub fn draw_card(&mut self) -> Result<JsValue, JsValue> {
        self.dispatch(Intent::DrawCard)
    }

    pub fn stand(&mut self) -> Result<JsValue, JsValue> {
        self.dispatch(Intent::Stand)
    }

    pub fn new_round(&mut self) -> Result<JsValue, JsValue> {
        self.dispatch(Intent::NewRound)
    }

    pub fn abandon_round(&mut self) -> Result<JsValue, JsValue> {
        self.dispatch(Intent::AbandonRound)
    }

    pub fn show_rules(&mut self) -> Result<JsValue, JsValue> {
        self.dispatch(Intent::ShowRules)
    }

    pub fn quit(&mut self) -> Result<JsValue, JsValue> {
        self.dispatch(Intent::Quit)
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        to_js_value(&JsView::from(self.table.view()))
    }
}

impl WasmTable {
    fn dispatch(&mut self, intent: Intent) -> Result<JsValue, JsValue> {
        let response = self.table.dispatch(intent).map_err(js_err)?;
        to_js_value(&JsResponse::from(response))
    }
}

fn options(name: String, capital: u32) -> TableOptions {
    let options = TableOptions::default().with_starting_capital(capital as usize);
    if name.is_empty() {
        options
    } else {
        options.with_player_name(name)
    }
}

#[derive(Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum JsResponse {
    Table { view: JsView },
    Resolved { result: JsRoundResult, view: JsView },
    Rules { text: &'static str },
    Quit { stats: JsStats },
}

impl From<Response> for JsResponse {
    fn from(response: Response) -> Self {
        match response {
            Response::Table(view) => Self::Table { view: view.into() },
            Response::Resolved { result, view } => Self::Resolved {
                result: result.into(),
                view: view.into(),
            },
            Response::Rules(text) => Self::Rules { text },
            Response::Quit(stats) => Self::Quit {
                stats: stats.into(),
            },
        }
    }
}

#[derive(Serialize)]
struct JsView {
    player_name: String,
    player_cards: Vec<JsCard>,
    player_value: Option<u8>,
    house_cards: Vec<JsCard>,
    house_value: Option<u8>,
    capital: u32,
    bet: u32,
    instruction: &'static str,
    message: &'static str,
    state: &'static str,
    stats: JsStats,
    cards_remaining: u32,
}

impl From<TableView> for JsView {
    fn from(view: TableView) -> Self {
        Self {
            player_name: view.player_name,
            player_cards: view.player_cards.into_iter().map(card_to_js).collect(),
            player_value: view.player_value,
            house_cards: view.house_cards.into_iter().map(card_to_js).collect(),
            house_value: view.house_value,
            capital: view.capital as u32,
            bet: view.bet as u32,
            instruction: instruction_to_str(view.instruction),
            message: view.instruction.message(),
            state: state_to_str(view.state),
            stats: view.stats.into(),
            cards_remaining: view.cards_remaining as u32,
        }
    }
}

#[derive(Serialize)]
struct JsStats {
    wins: u32,
    losses: u32,
    draws: u32,
}

impl From<StatsSummary> for JsStats {
    fn from(stats: StatsSummary) -> Self {
        Self {
            wins: stats.wins,
            losses: stats.losses,
            draws: stats.draws,
        }
    }
}

#[derive(Serialize)]
struct JsCard {
    suit: &'static str,
    rank: &'static str,
}

#[derive(Serialize)]
struct JsRoundResult {
    outcome: &'static str,
    payout: u32,
    bet: u32,
    player_value: u8,
    house_value: u8,
    player_bust: bool,
    house_bust: bool,
}

impl From<RoundResult> for JsRoundResult {
    fn from(result: RoundResult) -> Self {
        Self {
            outcome: outcome_to_str(result.outcome),
            payout: result.payout() as u32,
            bet: result.bet as u32,
            player_value: result.player_value,
            house_value: result.house_value,
            player_bust: result.player_bust,
            house_bust: result.house_bust,
        }
    }
}

fn card_to_js(card: Card) -> JsCard {
    JsCard {
        suit: suit_to_str(card.suit),
        rank: card.rank.label(),
    }
}

fn suit_to_str(suit: Suit) -> &'static str {
    match suit {
        Suit::Hearts => "Hearts",
        Suit::Diamonds => "Diamonds",
        Suit::Clubs => "Clubs",
        Suit::Spades => "Spades",
    }
}

fn state_to_str(state: RoundState) -> &'static str {
    match state {
        RoundState::AwaitingBet => "AwaitingBet",
        RoundState::PlayerTurn => "PlayerTurn",
        RoundState::HouseTurn => "HouseTurn",
        RoundState::Resolved => "Resolved",
    }
}

fn instruction_to_str(instruction: Instruction) -> &'static str {
    match instruction {
        Instruction::PlaceBet => "PlaceBet",
        Instruction::DecideNextMove => "DecideNextMove",
        Instruction::Busted => "Busted",
        Instruction::WonRound => "WonRound",
        Instruction::LostRound => "LostRound",
        Instruction::DrawRound => "DrawRound",
    }
}

fn outcome_to_str(outcome: RoundOutcome) -> &'static str {
    match outcome {
        RoundOutcome::Win { .. } => "Win",
        RoundOutcome::Lose => "Lose",
        RoundOutcome::Draw => "Draw",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
