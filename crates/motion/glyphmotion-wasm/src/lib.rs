use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;

use glyphmotion_core::{
    AxisConfig, Config, CubicBezier, Engine, FadeMode, StatePool, TweenId,
};

/// Bump when the JS-visible surface changes incompatibly.
#[wasm_bindgen]
pub fn abi_version() -> u32 {
    1
}

fn jsvalue_is_undefined_or_null(v: &JsValue) -> bool {
    v.is_undefined() || v.is_null()
}

/// The bezier argument arrives as an arbitrary JS value; require exactly
/// four finite numbers, mirroring the array-shape check a dynamic caller
/// needs.
fn curve_from_js(bezier: JsValue) -> Result<CubicBezier, JsError> {
    let pts: Vec<f64> = swb::from_value(bezier)
        .map_err(|e| JsError::new(&format!("bezier must be an array of four numbers: {e}")))?;
    if pts.len() != 4 {
        return Err(JsError::new(&format!(
            "bezier must be an array of four numbers, got {}",
            pts.len()
        )));
    }
    Ok(CubicBezier::from_array([pts[0], pts[1], pts[2], pts[3]]))
}

fn axes_from_js(label: &str, value: JsValue) -> Result<AxisConfig, JsError> {
    swb::from_value(value).map_err(|e| JsError::new(&format!("{label} config error: {e}")))
}

#[wasm_bindgen]
pub struct GlyphMotion {
    core: Engine,
}

#[wasm_bindgen]
impl GlyphMotion {
    /// Create a new engine instance. Pass a JSON config object or
    /// undefined/null for defaults.
    /// Example:
    ///   new GlyphMotion({ duration_ms: 500, stagger_ms: 100 })
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<GlyphMotion, JsError> {
        console_error_panic_hook::set_once();

        let cfg: Config = if jsvalue_is_undefined_or_null(&config) {
            Config::default()
        } else {
            swb::from_value(config).map_err(|e| JsError::new(&format!("config error: {e}")))?
        };

        Ok(GlyphMotion {
            core: Engine::new(cfg),
        })
    }

    /// Queue a fade/slide tween for `target`. Returns a tween id; the
    /// request itself appears in the next `update()` output, and the JS
    /// shell submits it via `el.animate(...)`.
    ///
    /// `mode` must be exactly "in" or "out"; `bezier` an array of four
    /// numbers; `custom_end` optionally overrides the end offset (e.g.
    /// "-50%").
    #[wasm_bindgen(js_name = fade_slide)]
    pub fn fade_slide(
        &mut self,
        target: &str,
        mode: &str,
        bezier: JsValue,
        duration_ms: f64,
        custom_end: Option<String>,
    ) -> Result<u32, JsError> {
        let mode: FadeMode = mode
            .parse()
            .map_err(|e| JsError::new(&format!("{e}")))?;
        let curve = curve_from_js(bezier)?;
        let id = self
            .core
            .fade_slide(target, mode, curve, duration_ms, custom_end)
            .map_err(|e| JsError::new(&format!("{e}")))?;
        Ok(id.0)
    }

    /// Report a natively-run tween as finished. The completion surfaces
    /// as a `TweenFinished` event in the next `update()` output.
    #[wasm_bindgen(js_name = tween_finished)]
    pub fn tween_finished(&mut self, id: u32) {
        self.core.tween_finished(TweenId(id));
    }

    /// Start a fire-and-forget morph of `target` between two axis
    /// configurations (plain objects of axis-name -> number).
    #[wasm_bindgen(js_name = animate_font_variation)]
    pub fn animate_font_variation(
        &mut self,
        target: &str,
        bezier: JsValue,
        duration_ms: f64,
        from: JsValue,
        to: JsValue,
    ) -> Result<(), JsError> {
        let curve = curve_from_js(bezier)?;
        let from = axes_from_js("from", from)?;
        let to = axes_from_js("to", to)?;
        self.core
            .animate_font_variation(target, curve, duration_ms, from, to)
            .map_err(|e| JsError::new(&format!("{e}")))
    }

    /// Begin cycling shuffled pool looks across the given targets. The
    /// JS shell performs DOM discovery and passes one key per element;
    /// a count mismatch errors and nothing is scheduled.
    #[wasm_bindgen(js_name = start_cycle)]
    pub fn start_cycle(&mut self, targets: Vec<String>, pool: JsValue) -> Result<(), JsError> {
        let pool: StatePool = swb::from_value(pool)
            .map_err(|e| JsError::new(&format!("pool error: {e}")))?;
        self.core
            .start_cycle(targets, pool)
            .map_err(|e| JsError::new(&format!("{e}")))
    }

    /// Pick the next look from `pool` for a single morph target, never
    /// repeating the previous pick.
    #[wasm_bindgen(js_name = select_next)]
    pub fn select_next(&mut self, pool: JsValue) -> Result<JsValue, JsError> {
        let pool: StatePool = swb::from_value(pool)
            .map_err(|e| JsError::new(&format!("pool error: {e}")))?;
        let picked = self
            .core
            .select_next(&pool)
            .map_err(|e| JsError::new(&format!("{e}")))?;
        swb::to_value(&picked).map_err(|e| JsError::new(&format!("{e}")))
    }

    /// Advance the engine to the frame timestamp (ms, as passed to a
    /// requestAnimationFrame callback) and return the outputs:
    /// `{ changes, tweens, events }`. The shell assigns each change's
    /// style to `el.style.fontVariationSettings` and submits each tween
    /// request natively.
    pub fn update(&mut self, now_ms: f64) -> Result<JsValue, JsError> {
        let outputs = self.core.update(now_ms);
        swb::to_value(&outputs).map_err(|e| JsError::new(&format!("{e}")))
    }

    /// The stock three-look state pool, as a JS value.
    #[wasm_bindgen(js_name = default_pool)]
    pub fn default_pool() -> Result<JsValue, JsError> {
        swb::to_value(&glyphmotion_core::presets::pool())
            .map_err(|e| JsError::new(&format!("{e}")))
    }
}
