// src/config/layout.rs
//! 画面レイアウトに関する定数を定義するよ！
//! 背景の位置、トレイ(ピース置き場)の座標、ボタンの矩形など。

// --- 画面 ---
pub const SCREEN_WIDTH: f32 = 300.0;
pub const SCREEN_HEIGHT: f32 = 500.0;

// --- 背景イラスト (人体図) ---
pub const BACKGROUND_WIDTH: f32 = 250.0;
pub const BACKGROUND_HEIGHT: f32 = 350.0;
/// 背景の左上 X 座標 (画面中央寄せ)
pub const BACKGROUND_X: f32 = SCREEN_WIDTH / 2.0 - BACKGROUND_WIDTH / 2.0;
/// 背景の左上 Y 座標 (中央から 70px 上にずらす)
pub const BACKGROUND_Y: f32 = SCREEN_HEIGHT / 2.0 - BACKGROUND_HEIGHT / 2.0 - 70.0;

// --- ピースの大きさ ---
/// 全ピース共通の「基準の高さ」。ピースごとの倍率をこれに掛ける。
pub const BASE_PIECE_HEIGHT: f32 = 45.0;
/// 当たり判定の標準の広げ幅 (px)
pub const DEFAULT_DRAG_INFLATION: f32 = 6.0;

// --- トレイ (下のスクロールする列) ---
/// スロット間の間隔。元の計算 int(45 * 1.4) と同じ 63px。
pub const TRAY_SPACING_X: i32 = 63;
/// 一番左のスロットの X 座標
pub const TRAY_START_X: f32 = TRAY_SPACING_X as f32;
/// トレイの Y 座標 (ピースの中心)
pub const TRAY_Y: f32 = 440.0;
/// スワイプを受け付けるトレイ領域
pub const TRAY_AREA_X: f32 = 0.0;
pub const TRAY_AREA_Y: f32 = TRAY_Y - 40.0;
pub const TRAY_AREA_WIDTH: f32 = SCREEN_WIDTH;
pub const TRAY_AREA_HEIGHT: f32 = 80.0;

// --- スクロール ---
/// 矢印を1回クリックした時のスクロール量
pub const SCROLL_STEP: i32 = 40;
/// 矢印を押しっぱなしの間、毎フレーム進む量
pub const HOLD_SCROLL_PER_TICK: i32 = 6;

// --- スナップ ---
/// アンカーからこの距離以内で離したらピタッとはまる
pub const SNAP_THRESHOLD: f32 = 35.0;

// --- UI コントロール (x, y, w, h) ---
pub const LEFT_ARROW_RECT: (f32, f32, f32, f32) = (5.0, TRAY_Y - 20.0, 30.0, 40.0);
pub const RIGHT_ARROW_RECT: (f32, f32, f32, f32) = (SCREEN_WIDTH - 35.0, TRAY_Y - 20.0, 30.0, 40.0);
pub const RESET_BUTTON_RECT: (f32, f32, f32, f32) = (SCREEN_WIDTH - 65.0, 10.0, 55.0, 30.0);
/// ライセンス表記 (クリックで外部リンク)
pub const LICENSE_TEXT_RECT: (f32, f32, f32, f32) = (5.0, 484.0, 120.0, 14.0);
/// プロジェクトアイコン (クリックで外部リンク)
pub const PROJECT_ICON_RECT: (f32, f32, f32, f32) = (270.0, 468.0, 26.0, 26.0);

// --- 外部リンク先 ---
pub const LICENSE_URL: &str = "https://creativecommons.org/licenses/by/4.0/";
/// プロジェクトページ。空のままならアイコンを押しても何も開かない (設定の `project_url` で入れる)
pub const PROJECT_URL: &str = "";
