use crate::models::{Channel, Stat, Video};

pub fn render_index(channels: &[Channel], videos: &[Video], stats: &[Stat]) -> String {
    INDEX_HTML
        .replace("{{CHANNELS}}", &render_channels(channels))
        .replace("{{VIDEOS}}", &render_videos(videos))
        .replace("{{STATS}}", &render_stats(stats))
}

pub fn render_channels(channels: &[Channel]) -> String {
    let mut out = String::new();
    for channel in channels {
        out.push_str(&format!(
            "<div class=\"item\">\n  <h3><a href=\"https://www.youtube.com/channel/{id}\" target=\"_blank\">{title}</a></h3>\n  <p>Tags: {tags}</p>\n</div>\n",
            id = escape_html(&channel.channel_id),
            title = escape_html(&channel.title),
            tags = escape_html(&channel.char_tags.join(", ")),
        ));
    }
    out
}

pub fn render_videos(videos: &[Video]) -> String {
    let mut out = String::new();
    for video in videos {
        out.push_str(&format!(
            "<div class=\"item\">\n  <h3><a href=\"https://www.youtube.com/watch?v={id}\" target=\"_blank\">{title}</a></h3>\n  <p>Channel: {channel}</p>\n  <p>Tags: {tags}</p>\n</div>\n",
            id = escape_html(&video.video_id),
            title = escape_html(&video.title),
            channel = escape_html(&video.channel_title),
            tags = escape_html(&video.char_tags.join(", ")),
        ));
    }
    out
}

pub fn render_stats(stats: &[Stat]) -> String {
    let mut out = String::new();
    for stat in stats {
        out.push_str(&format!(
            "<div class=\"item\">\n  <h3><a href=\"https://www.youtube.com/watch?v={id}\" target=\"_blank\">{title}</a></h3>\n  <p>Total views: {total}</p>\n  <p>Views (last 30 days): {recent}</p>\n</div>\n",
            id = escape_html(&stat.video_id),
            title = escape_html(&stat.video_title),
            total = format_views(stat.total_views),
            recent = format_views(stat.views_last_30_days),
        ));
    }
    out
}

// Item fields come from the upstream database; never trust them in markup.
fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
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

fn format_views(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Channel Dashboard</title>
  <style>
    :root {
      --bg: #f6f4ef;
      --ink: #24292f;
      --accent: #c4302b;
      --card: #ffffff;
      --muted: #6b645d;
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: "Helvetica Neue", Arial, sans-serif;
      padding: 32px 18px 48px;
    }

    .dashboard {
      width: min(960px, 100%);
      margin: 0 auto;
      display: grid;
      gap: 28px;
    }

    header h1 {
      margin: 0;
      font-size: clamp(1.8rem, 4vw, 2.4rem);
    }

    header p {
      margin: 6px 0 0;
      color: var(--muted);
    }

    section h2 {
      margin: 0 0 12px;
      font-size: 1.3rem;
      border-bottom: 2px solid var(--accent);
      padding-bottom: 6px;
    }

    .list {
      display: grid;
      gap: 12px;
    }

    .item {
      background: var(--card);
      border-radius: 12px;
      padding: 14px 18px;
      border: 1px solid rgba(36, 41, 47, 0.08);
    }

    .item h3 {
      margin: 0 0 6px;
      font-size: 1.05rem;
    }

    .item a {
      color: var(--accent);
      text-decoration: none;
    }

    .item a:hover {
      text-decoration: underline;
    }

    .item p {
      margin: 2px 0;
      color: var(--muted);
      font-size: 0.92rem;
    }
  </style>
</head>
<body>
  <main class="dashboard">
    <header>
      <h1>Channel Dashboard</h1>
      <p>Registered channels, recent videos, and view-count rankings.</p>
    </header>

    <section>
      <h2>Channels</h2>
      <div id="channels-list" class="list">
{{CHANNELS}}
      </div>
    </section>

    <section>
      <h2>Videos</h2>
      <div id="videos-list" class="list">
{{VIDEOS}}
      </div>
    </section>

    <section>
      <h2>View Rankings</h2>
      <div id="stats-list" class="list">
{{STATS}}
      </div>
    </section>
  </main>
</body>
</html>
"#;
