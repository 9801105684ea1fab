//! Browser chat page served at `/`

pub const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html>
  <head>
    <title>AI Chatbot</title>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <style>
      body {
        display: flex;
        justify-content: center;
        align-items: center;
        height: 100vh;
        margin: 0;
        background: #f5f5f5;
        font-family: Arial, sans-serif;
      }
      .chat-container {
        width: 400px;
        max-width: 90%;
        height: 500px;
        border: 2px solid #333;
        border-radius: 10px;
        background: white;
        display: flex;
        flex-direction: column;
        padding: 12px;
        box-shadow: 0 4px 12px rgba(0, 0, 0, 0.2);
      }
      #chatbox {
        flex: 1;
        border: 1px solid #ccc;
        border-radius: 6px;
        padding: 10px;
        overflow-y: auto;
        margin-bottom: 10px;
        white-space: pre-wrap;
      }
      #userInput {
        width: 75%;
        padding: 8px;
      }
      button {
        padding: 8px 12px;
        border: none;
        border-radius: 6px;
        background: #007bff;
        color: white;
        cursor: pointer;
      }
      button:hover {
        background: #0056b3;
      }
    </style>
  </head>
  <body>
    <div class="chat-container">
      <h3 style="text-align:center; margin:0 0 10px 0;">AI Chatbot</h3>
      <div id="chatbox">
        <div><em>Bot:</em> Hi! Ask me about support hours, password reset, refund policy, orders, or contacting support.</div>
      </div>
      <div>
        <input type="text" id="userInput" placeholder="Type your question..." />
        <button onclick="sendMessage()">Send</button>
      </div>
    </div>

    <script>
      function addBubble(sender, text) {
        const chat = document.getElementById("chatbox");
        const div = document.createElement("div");
        const name = document.createElement("strong");
        div.style.margin = "8px 0";
        name.textContent = sender + ": ";
        div.appendChild(name);
        div.appendChild(document.createTextNode(text));
        chat.appendChild(div);
        chat.scrollTop = chat.scrollHeight;
      }

      async function sendMessage() {
        const input = document.getElementById("userInput");
        const msg = input.value.trim();
        if (!msg) return;
        addBubble("You", msg);
        input.value = "";

        try {
          const res = await fetch("/chat", {
            method: "POST",
            headers: { "Content-Type": "application/json" },
            body: JSON.stringify({ message: msg })
          });
          const data = await res.json();
          addBubble("Bot", data.response || data.error || "(no reply)");
        } catch (e) {
          addBubble("Bot", "Network error. Is the server running?");
        }
      }

      document.getElementById("userInput").addEventListener("keydown", (e) => {
        if (e.key === "Enter") sendMessage();
      });
    </script>
  </body>
</html>
"#;
