//! Static HTML documents served by the keyword strategy.
//!
//! Each template is a complete self-contained document rendered into an
//! app window frame. Shared chrome (font stack, page background) lives in
//! `wrap` so the documents stay consistent.

/// System font stack used by every template.
const FONT_STACK: &str =
    "-apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif";

fn wrap(title: &str, style: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"UTF-8\">\n\
         <title>{title}</title>\n<style>\n\
         body {{ font-family: {FONT_STACK}; margin: 0; padding: 20px; background: #f0f0f0; }}\n\
         {style}\n</style>\n</head>\n<body>\n{body}\n</body>\n</html>"
    )
}

pub fn calculator_app() -> String {
    wrap(
        "Calculator",
        ".calc { background: #fff; border-radius: 12px; padding: 20px; max-width: 300px; margin: 0 auto; }\n\
         .display { background: #000; color: #fff; padding: 20px; text-align: right; font-size: 24px; border-radius: 8px; }\n\
         .keys { display: grid; grid-template-columns: repeat(4, 1fr); gap: 10px; margin-top: 20px; }\n\
         .keys button { padding: 18px; border: none; border-radius: 8px; font-size: 18px; }",
        "<div class=\"calc\">\n<div class=\"display\" id=\"display\">0</div>\n\
         <div class=\"keys\" id=\"keys\"></div>\n\
         <script>\n\
         const keys = ['7','8','9','/','4','5','6','*','1','2','3','-','0','.','=','+'];\n\
         const grid = document.getElementById('keys');\n\
         let expr = '';\n\
         keys.forEach(k => { const b = document.createElement('button'); b.textContent = k;\n\
           b.onclick = () => { if (k === '=') { try { expr = String(eval(expr) ?? 0); } catch { expr = ''; } }\n\
             else { expr += k; }\n\
             document.getElementById('display').textContent = expr || '0'; };\n\
           grid.appendChild(b); });\n\
         </script>\n</div>",
    )
}

pub fn notepad_app() -> String {
    wrap(
        "Notepad",
        "textarea { width: 100%; height: 70vh; border: 1px solid #ddd; border-radius: 8px; padding: 12px; font-size: 15px; box-sizing: border-box; }",
        "<textarea placeholder=\"...\" autofocus></textarea>",
    )
}

pub fn todo_app() -> String {
    wrap(
        "Tasks",
        "ul { list-style: none; padding: 0; } li { background: #fff; margin: 6px 0; padding: 10px; border-radius: 8px; }\n\
         input { width: 70%; padding: 10px; border: 1px solid #ddd; border-radius: 8px; }",
        "<input id=\"task\" placeholder=\"...\"> <button onclick=\"add()\">+</button>\n<ul id=\"list\"></ul>\n\
         <script>\nfunction add() { const v = document.getElementById('task').value.trim(); if (!v) return;\n\
           const li = document.createElement('li'); li.textContent = v;\n\
           li.onclick = () => li.remove();\n\
           document.getElementById('list').appendChild(li);\n\
           document.getElementById('task').value = ''; }\n</script>",
    )
}

pub fn timer_app() -> String {
    wrap(
        "Timer",
        ".time { font-size: 56px; text-align: center; margin: 40px 0; font-variant-numeric: tabular-nums; }\n\
         .row { text-align: center; } button { padding: 12px 24px; margin: 0 6px; border-radius: 8px; border: none; }",
        "<div class=\"time\" id=\"time\">00:00</div>\n\
         <div class=\"row\"><button onclick=\"start()\">Start</button><button onclick=\"stop()\">Stop</button><button onclick=\"reset()\">Reset</button></div>\n\
         <script>\nlet s = 0, h = null;\n\
         function draw() { const m = String(Math.floor(s / 60)).padStart(2, '0');\n\
           document.getElementById('time').textContent = m + ':' + String(s % 60).padStart(2, '0'); }\n\
         function start() { if (!h) h = setInterval(() => { s++; draw(); }, 1000); }\n\
         function stop() { clearInterval(h); h = null; }\n\
         function reset() { stop(); s = 0; draw(); }\n</script>",
    )
}

pub fn weather_app() -> String {
    wrap(
        "Weather",
        ".card { background: linear-gradient(135deg, #74b9ff, #0984e3); color: #fff; border-radius: 12px; padding: 32px; text-align: center; }\n\
         .deg { font-size: 48px; }",
        "<div class=\"card\">\n<div class=\"deg\">21&deg;</div>\n<div>Partly cloudy</div>\n\
         <div style=\"margin-top:12px;opacity:.8\">Static demo data</div>\n</div>",
    )
}

pub fn game_app(prompt: &str) -> String {
    wrap(
        "Game",
        ".board { text-align: center; margin-top: 40px; } .score { font-size: 20px; }\n\
         .target { font-size: 64px; cursor: pointer; user-select: none; }",
        &format!(
            "<div class=\"board\">\n<div class=\"score\">Score: <span id=\"score\">0</span></div>\n\
             <div class=\"target\" id=\"target\" onclick=\"hit()\">&#127919;</div>\n\
             <div style=\"color:#888\">{}</div>\n\
             <script>\nlet n = 0;\nfunction hit() {{ n++; document.getElementById('score').textContent = n;\n\
               const t = document.getElementById('target');\n\
               t.style.marginLeft = ((n * 37) % 200 - 100) + 'px'; }}\n</script>\n</div>",
            escape_html(prompt)
        ),
    )
}

pub fn form_app(prompt: &str) -> String {
    wrap(
        "Form",
        "form { background: #fff; border-radius: 12px; padding: 20px; max-width: 420px; }\n\
         label { display: block; margin-top: 12px; } input, textarea { width: 100%; padding: 8px; box-sizing: border-box; }",
        &format!(
            "<form onsubmit=\"event.preventDefault(); done.style.display='block'\">\n\
             <p>{}</p>\n\
             <label>Name<input required></label>\n\
             <label>Details<textarea rows=\"4\"></textarea></label>\n\
             <button style=\"margin-top:16px\">Submit</button>\n\
             <p id=\"done\" style=\"display:none;color:#0a7\">Saved.</p>\n</form>",
            escape_html(prompt)
        ),
    )
}

pub fn chart_app() -> String {
    wrap(
        "Chart",
        ".bars { display: flex; align-items: flex-end; gap: 12px; height: 220px; margin-top: 30px; }\n\
         .bars div { flex: 1; background: #007AFF; border-radius: 6px 6px 0 0; }",
        "<div class=\"bars\">\n<div style=\"height:40%\"></div>\n<div style=\"height:75%\"></div>\n\
         <div style=\"height:55%\"></div>\n<div style=\"height:90%\"></div>\n<div style=\"height:30%\"></div>\n</div>",
    )
}

pub fn custom_app(prompt: &str, app_name: &str) -> String {
    wrap(
        app_name,
        ".hero { background: #fff; border-radius: 12px; padding: 32px; }\n\
         .prompt { color: #666; margin-top: 12px; }",
        &format!(
            "<div class=\"hero\">\n<h1>{}</h1>\n<p class=\"prompt\">{}</p>\n</div>",
            escape_html(app_name),
            escape_html(prompt)
        ),
    )
}

/// Fallback substituted when generation fails.
pub fn basic_template(app_name: &str, prompt: &str) -> String {
    wrap(
        app_name,
        ".fallback { text-align: center; margin-top: 60px; color: #666; }",
        &format!(
            "<div class=\"fallback\">\n<h2>{}</h2>\n<p>{}</p>\n</div>",
            escape_html(app_name),
            escape_html(prompt)
        ),
    )
}

/// Document shown by the built-in welcome app.
pub fn welcome_app() -> String {
    wrap(
        "Welcome",
        "body { background: linear-gradient(135deg, #667eea, #764ba2); color: #fff; }\n\
         .welcome { text-align: center; margin-top: 15vh; }",
        "<div class=\"welcome\">\n<h1>&#128075;</h1>\n<h2>ATRIUM DESK</h2>\n\
         <p>Add an app from the header bar to get started.</p>\n</div>",
    )
}

/// Minimal HTML escaping for prompt text interpolated into templates.
fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
