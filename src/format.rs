/*!

Wire format of ILInt values and tags.

# ILInt

An ILInt is an unsigned 64-bit integer in 1 to 9 bytes. The first byte says how long the whole
thing is.

```text
+----------+
| 0XXXXXXX |   values 0 to 247 (0x00 - 0xF7) are their own encoding
+----------+

+----------+==========+
| 11111NNN |  N+1 B   |  everything from 248 up
+----------+==========+

- 11111NNN is 0xF8 + NNN, with NNN from 0 to 7
- the following NNN+1 bytes are (value - 248) as a big-endian unsigned integer
```

| Value range                      | Size |
| --                               | --   |
| 0 to 247                         | 1    |
| 248 to 503                       | 2    |
| 504 to 65,783                    | 3    |
| 65,784 to 16,777,463             | 4    |
| ...                              | ...  |
| 72,057,594,037,928,184 and above | 9    |

Every value has exactly one encoding, the shortest one. Decoders reject longer forms, as well as
9-byte forms whose magnitude would push the value past `u64::MAX`.

Some examples:

| Value                | Encoding                            |
| --                   | --                                  |
| 0                    | `00`                                |
| 247                  | `F7`                                |
| 248                  | `F8 00`                             |
| 503                  | `F8 FF`                             |
| 504                  | `F9 01 00`                          |
| 18446744073709551615 | `FF FF FF FF FF FF FF FF 07`        |

# Tags

Every tag is an ILInt id, an ILInt value size for explicit ids, and the value.

```text
+=========+============+=========+
| ILInt   | ILInt      |  Value  |   explicit tag (id 16 and up)
| id      | value size |         |
+=========+============+=========+

+=========+=========+
| ILInt   |  Value  |                implicit tag (id 0 to 15)
| id      |         |
+=========+=========+
```

Implicit tags leave out the size because the id fixes it. The one exception is id 10, whose
value is a single ILInt and so carries its own length in its first byte. Ids 14 and 15 are
implicit but have no assigned width, so they can't be decoded.

Ids 0 to 31 are reserved for the standard tags. Applications pick their own ids from 32 up.

# Standard tags

| Id | Name              | Value                                                   |
| -- | --                | --                                                      |
| 0  | Null              | nothing                                                 |
| 1  | Bool              | 1 byte, `00` or `01`                                    |
| 2  | Int8              | 1 byte, signed                                          |
| 3  | UInt8             | 1 byte                                                  |
| 4  | Int16             | 2 bytes, big-endian, signed                             |
| 5  | UInt16            | 2 bytes, big-endian                                     |
| 6  | Int32             | 4 bytes, big-endian, signed                             |
| 7  | UInt32            | 4 bytes, big-endian                                     |
| 8  | Int64             | 8 bytes, big-endian, signed                             |
| 9  | UInt64            | 8 bytes, big-endian                                     |
| 10 | ILInt64           | 1 ILInt                                                 |
| 11 | Binary32          | 4 bytes, IEEE 754 single precision, big-endian          |
| 12 | Binary64          | 8 bytes, IEEE 754 double precision, big-endian          |
| 13 | Binary128         | 16 opaque bytes                                         |
| 16 | Byte array        | any bytes                                               |
| 17 | String            | UTF-8 text                                              |
| 18 | Big integer       | big-endian two's-complement bytes                       |
| 19 | Big decimal       | 4-byte big-endian signed scale, then a big integer      |
| 20 | ILInt64 array     | ILInt entry count, then the entries as ILInts           |
| 21 | Tag array         | ILInt entry count, then the entries as complete tags    |
| 22 | Tag sequence      | complete tags back to back, no count                    |
| 23 | Range             | reserved                                                |
| 24 | Version           | reserved                                                |

Arrays start with their entry count. Exactly that many entries are read, and they must fill the
value size exactly: an entry that runs past the end of the value fails the decode, and so do
bytes left over after the last entry. A tag sequence has no count and reads entries until the
value is used up.

As an example, a tag array holding the Int32 -5 and the string "ok":

```text
15 0A                  tag array, 10 bytes of value
   02                  2 entries
   06 FF FF FF FB      Int32 -5
   11 02 6F 6B         String, 2 bytes, "ok"
```

*/
