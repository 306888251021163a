//! Server-side resume page. The original rendered these sections in the
//! browser from the same parsed structure; here an askama template produces
//! the whole page, and a small script drives the ask panel against the API.

use askama::Template;

use crate::resume::ResumeData;

#[derive(Template)]
#[template(
    ext = "html",
    source = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{{ resume.name }} — Resume</title>
<style>
body { font-family: -apple-system, 'Segoe UI', Roboto, sans-serif; max-width: 860px; margin: 0 auto; padding: 24px; color: #222; }
h1 { margin-bottom: 4px; }
h2 { border-bottom: 2px solid #e0e0e0; padding-bottom: 6px; color: #2a5db0; }
.contact { color: #555; margin-bottom: 24px; }
.entry { margin-bottom: 16px; }
.entry-head { display: flex; justify-content: space-between; font-weight: 600; }
.period { color: #777; font-weight: 400; }
ul { margin: 6px 0 0 0; }
.chat { background: #f6f8fa; border-radius: 8px; padding: 16px; margin-top: 32px; }
.chat input { width: 70%; padding: 8px; }
.chat button { padding: 8px 14px; }
#status { color: #777; min-height: 1.2em; }
#answer { white-space: pre-wrap; }
.history-item { cursor: pointer; color: #2a5db0; }
</style>
</head>
<body>
<h1>{{ resume.name }}</h1>
<p class="contact">
{{ resume.contact.email }} · {{ resume.contact.phone }} ·
<a href="{{ resume.contact.linked_in_url }}">LinkedIn</a> ·
<a href="{{ resume.contact.github }}">GitHub</a>
</p>

<h2>Profile</h2>
<p>{{ resume.profile }}</p>

<h2>Education</h2>
{% for entry in resume.education %}
<div class="entry">
<div class="entry-head"><span>{{ entry.institution }}</span><span class="period">{{ entry.period }}</span></div>
<div>{{ entry.detail }}</div>
</div>
{% endfor %}

<h2>Experience</h2>
{% for entry in resume.experience %}
<div class="entry">
<div class="entry-head"><span>{{ entry.organization }}</span><span class="period">{{ entry.period }}</span></div>
<div><em>{{ entry.role }}</em></div>
<ul>
{% for bullet in entry.bullets %}<li>{{ bullet }}</li>
{% endfor %}</ul>
</div>
{% endfor %}

<h2>Projects</h2>
{% for entry in resume.projects %}
<div class="entry">
<div class="entry-head"><span>{{ entry.name }}</span><span class="period">{{ entry.period }}</span></div>
{% for line in entry.context %}<div><em>{{ line }}</em></div>
{% endfor %}<ul>
{% for bullet in entry.bullets %}<li>{{ bullet }}</li>
{% endfor %}</ul>
</div>
{% endfor %}

<h2>Skills</h2>
<ul>
{% for group in resume.skills %}<li><strong>{{ group.label }}</strong>: {{ group.value }}</li>
{% endfor %}</ul>

<h2>Certifications</h2>
<ul>
{% for cert in resume.certifications %}<li>{{ cert }}</li>
{% endfor %}</ul>

<div class="chat">
<h2>Ask about this resume</h2>
<input id="question" type="text" placeholder="e.g. Where did Jordan work in 2021?">
<button id="ask-btn" onclick="askQuestion()">Ask</button>
<button onclick="copyAnswer()">Copy answer</button>
<p id="status"></p>
<p id="answer">Ask a question to see the answer here.</p>
<h3>Recent questions</h3>
<ul id="history"></ul>
</div>

<script>
const statusEl = document.getElementById('status');
const answerEl = document.getElementById('answer');
const questionEl = document.getElementById('question');
const askBtn = document.getElementById('ask-btn');

async function askQuestion() {
  askBtn.disabled = true;
  statusEl.textContent = 'Thinking…';
  try {
    const res = await fetch('/api/v1/ask?question=' + encodeURIComponent(questionEl.value));
    const body = await res.json();
    if (res.ok) {
      answerEl.textContent = body.answer;
      statusEl.textContent = '';
    } else {
      statusEl.textContent = body.error.message;
    }
  } catch (err) {
    statusEl.textContent = String(err);
  } finally {
    askBtn.disabled = false;
  }
  loadHistory();
}

async function copyAnswer() {
  const res = await fetch('/api/v1/chat/copy', { method: 'POST' });
  const body = await res.json();
  if (body.text) {
    try {
      await navigator.clipboard.writeText(body.text);
      statusEl.textContent = body.status || '';
    } catch (err) {
      statusEl.textContent = 'Copy failed: ' + String(err);
    }
    setTimeout(function () { statusEl.textContent = ''; }, 3000);
  }
}

async function loadHistory() {
  const res = await fetch('/api/v1/history');
  const entries = await res.json();
  const list = document.getElementById('history');
  list.innerHTML = '';
  for (const entry of entries) {
    const li = document.createElement('li');
    li.className = 'history-item';
    li.textContent = entry.question;
    li.onclick = async function () {
      await fetch('/api/v1/history/' + entry.id + '/reuse', { method: 'POST' });
      questionEl.value = entry.question;
    };
    list.appendChild(li);
  }
}

loadHistory();
</script>
</body>
</html>
"#
)]
pub struct ResumePage<'a> {
    pub resume: &'a ResumeData,
}

impl<'a> ResumePage<'a> {
    pub fn new(resume: &'a ResumeData) -> Self {
        Self { resume }
    }
}
